//! Certificate Generator Component
//!
//! Uploads a CSV of students and courses and downloads the generated
//! certificates archive.

use leptos::prelude::*;
use leptos::task::spawn_local;

use lms_core::certificate::{MISSING_FILE, SAMPLE_CSV, SAMPLE_CSV_NAME};

use crate::api;
use crate::browser::{download_bytes, read_file};
use crate::config::AppConfig;

#[component]
pub fn CertificateGenerator() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let file_input = NodeRef::<leptos::html::Input>::new();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_generate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            set_error.set(Some(MISSING_FILE.to_string()));
            return;
        };

        let config = config.clone();
        set_loading.set(true);
        spawn_local(async move {
            let result: Result<(), String> = async {
                let csv = read_file(&file).await?;
                let archive = api::generate_certificates(&config, &file.name(), csv).await?;
                download_bytes(&archive.bytes, &archive.file_name, "application/zip")
            }
            .await;
            if let Err(e) = result {
                log::error!("[Certificates] generation failed: {}", e);
                set_error.set(Some(e));
            }
            set_loading.set(false);
        });
    };

    let on_sample = move |_| {
        if let Err(e) = download_bytes(SAMPLE_CSV.as_bytes(), SAMPLE_CSV_NAME, "text/csv") {
            log::error!("[Certificates] sample download failed: {}", e);
        }
    };

    view! {
        <div class="max-w-xl mx-auto p-6 bg-white rounded shadow mt-10">
            <h2 class="text-xl font-bold mb-4">"Generate Certificates"</h2>
            <p class="text-sm text-gray-600 mb-4">
                "Upload a CSV with the columns studentName and courseName."
            </p>
            <form on:submit=on_generate class="space-y-4">
                <input
                    type="file"
                    accept=".csv"
                    node_ref=file_input
                    disabled=move || loading.get()
                    class="block w-full text-sm border rounded p-2"
                />
                <div class="flex gap-2">
                    <button
                        type="submit"
                        class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Generating..." } else { "Generate & Download" }}
                    </button>
                    <button
                        type="button"
                        class="border px-4 py-2 rounded hover:bg-gray-50"
                        on:click=on_sample
                    >
                        "Download sample"
                    </button>
                </div>
            </form>
            {move || error.get().map(|msg| view! {
                <p class="mt-4 text-sm text-red-600">{msg}</p>
            })}
        </div>
    }
}
