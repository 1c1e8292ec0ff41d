//! Upload section: drop zone, staging list, and the analysis trigger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Files are never transferred. Picked or dropped files are validated and
//! staged in `UploadState`; each staged file flips to `Success` after
//! `UPLOAD_DELAY_MS` on a component-scoped timer. "Start AI Analysis" only
//! scrolls to the demo once at least one file is ready.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::content::landing::UPLOAD_INFO_CARDS;
use crate::state::upload::{
    ACCEPT_EXTENSIONS, FileCandidate, FileStatus, UPLOAD_DELAY_MS, UploadState, UploadedFile, format_file_size,
    supported_formats_note,
};
use crate::util::alert::notify_error;
use crate::util::scroll::{SectionId, use_scroll_targets};
use crate::util::timer::{Liveness, after};

const FILE_INPUT_ID: &str = "file-upload";

/// Row identity for the staging list. A status change re-keys the row so its
/// marker re-renders.
pub fn row_key(file: &UploadedFile) -> (String, FileStatus) {
    (file.id.clone(), file.status)
}

/// Modifier class and glyph for a file's status marker.
pub fn status_marker(status: FileStatus) -> (&'static str, &'static str) {
    match status {
        FileStatus::Uploading => ("upload-file__status--uploading", "…"),
        FileStatus::Success => ("upload-file__status--success", "✔"),
        FileStatus::Error => ("upload-file__status--error", "!"),
    }
}

#[component]
pub fn Upload() -> impl IntoView {
    let targets = use_scroll_targets();
    let upload = RwSignal::new(UploadState::default());
    let liveness = Liveness::scoped();

    let stage = move |candidates: Vec<FileCandidate>| {
        if candidates.is_empty() {
            return;
        }
        let report = upload.try_update(|s| s.stage_all(candidates)).unwrap_or_default();
        for err in &report.rejected {
            notify_error(err);
        }
        for id in report.staged {
            log::debug!("staged file {id}");
            after(UPLOAD_DELAY_MS, &liveness, move || {
                upload.update(|s| {
                    s.mark_uploaded(&id);
                });
            });
        }
    };
    let stage_dropped = stage.clone();

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !upload.with_untracked(|s| s.is_drag_over) {
            upload.update(|s| s.is_drag_over = true);
        }
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|s| s.is_drag_over = false);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|s| s.is_drag_over = false);
        stage_dropped(dropped_files(&ev));
    };
    let on_select = move |ev: leptos::ev::Event| stage(selected_files(&ev));

    let on_sample = move |_| {
        upload.update(UploadState::load_sample_report);
        log::info!("sample report loaded");
    };

    let on_start_analysis = move |_| match upload.with_untracked(UploadState::begin_analysis) {
        Ok(ready) => {
            log::info!("starting analysis with {ready} ready file(s)");
            targets.scroll_to(SectionId::Demo);
        }
        Err(err) => notify_error(&err),
    };

    view! {
        <section id=SectionId::Upload.anchor() node_ref=targets.node(SectionId::Upload) class="section">
            <div class="container container--narrow">
                <div class="section-header">
                    <h2 class="section-title gradient-text">"Upload Medical Report"</h2>
                    <p class="section-description">
                        "Securely upload your medical reports to begin AI-powered diagnostic analysis"
                    </p>
                </div>
                <div class="upload-panel border-gradient">
                    <div
                        class="upload-dropzone"
                        class:upload-dropzone--active=move || upload.with(|s| s.is_drag_over)
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                    >
                        <span class="upload-dropzone__icon" aria-hidden="true">"⬆"</span>
                        <h3 class="upload-dropzone__title">"Drop your medical reports here"</h3>
                        <p class="upload-dropzone__hint">"or click to browse files"</p>
                        <input
                            type="file"
                            multiple
                            accept=ACCEPT_EXTENSIONS
                            id=FILE_INPUT_ID
                            class="visually-hidden"
                            on:change=on_select
                        />
                        <div class="upload-dropzone__actions">
                            <label for=FILE_INPUT_ID class="btn btn--primary">"Browse Files"</label>
                            <button class="btn btn--ghost" on:click=on_sample>"Load Sample Report"</button>
                        </div>
                        <p class="upload-dropzone__formats">{supported_formats_note()}</p>
                    </div>

                    <Show when=move || upload.with(|s| !s.files.is_empty())>
                        <div class="upload-files">
                            <h4 class="upload-files__title">"Uploaded Files"</h4>
                            <For
                                each=move || upload.get().files
                                key=row_key
                                children=move |file| view! { <UploadedFileRow file upload/> }
                            />
                            <Show when=move || upload.with(UploadState::has_ready_files)>
                                <div class="upload-files__actions">
                                    <button class="btn btn--primary btn--large" on:click=on_start_analysis>
                                        "Start AI Analysis"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>

                <div class="info-cards">
                    {UPLOAD_INFO_CARDS
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="info-card">
                                    <span class="info-card__icon" aria-hidden="true">{card.icon}</span>
                                    <h4 class="info-card__title">{card.title}</h4>
                                    <p class="info-card__description">{card.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn UploadedFileRow(file: UploadedFile, upload: RwSignal<UploadState>) -> impl IntoView {
    let (status_class, glyph) = status_marker(file.status);
    let id = file.id;
    let on_remove = move |_| {
        upload.update(|s| {
            s.remove(&id);
        });
    };

    view! {
        <div class="upload-file">
            <span class="upload-file__icon" aria-hidden="true">"📄"</span>
            <div class="upload-file__meta">
                <p class="upload-file__name">{file.name}</p>
                <p class="upload-file__size">{format_file_size(file.size)}</p>
            </div>
            <span class=format!("upload-file__status {status_class}") aria-label=format!("{:?}", file.status)>
                {glyph}
            </span>
            <button class="upload-file__remove" aria-label="Remove file" on:click=on_remove>"✕"</button>
        </div>
    }
}

// =============================================================================
// BROWSER FILE EXTRACTION
// =============================================================================

fn dropped_files(ev: &leptos::ev::DragEvent) -> Vec<FileCandidate> {
    #[cfg(feature = "hydrate")]
    {
        file_list_candidates(ev.data_transfer().and_then(|dt| dt.files()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        Vec::new()
    }
}

fn selected_files(ev: &leptos::ev::Event) -> Vec<FileCandidate> {
    #[cfg(feature = "hydrate")]
    {
        let input = event_target::<web_sys::HtmlInputElement>(ev);
        let candidates = file_list_candidates(input.files());
        // Allow picking the same file again.
        input.set_value("");
        candidates
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        Vec::new()
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_list_candidates(list: Option<web_sys::FileList>) -> Vec<FileCandidate> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| FileCandidate::new(file.name(), file.size() as u64, file.type_()))
        .collect()
}
