use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use super::effects::notify;
use crate::config::RESUME_FILENAME;
use crate::content::PROFILE;
use crate::error::{Notification, PortfolioError};

fn dispatch_err(e: JsValue) -> PortfolioError {
    PortfolioError::DownloadDispatch(format!("{e:?}"))
}

/// Clicks a throwaway `<a download>` pointing at the resume, then drops it.
pub fn download_resume() -> Result<(), PortfolioError> {
    let document = document();
    let anchor = document
        .create_element("a")
        .map_err(dispatch_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| PortfolioError::DownloadDispatch("created element is not an anchor".into()))?;
    anchor.set_href(PROFILE.resume);
    anchor.set_download(RESUME_FILENAME);
    let body = document
        .body()
        .ok_or_else(|| PortfolioError::DownloadDispatch("document has no body".into()))?;
    body.append_child(&anchor).map_err(dispatch_err)?;
    anchor.click();
    anchor.remove();
    log::info!("resume download dispatched");
    Ok(())
}

#[component]
pub fn ResumeButton() -> impl IntoView {
    view! {
        <button
            type="button"
            class="mt-8 bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-md font-medium transition-colors"
            on:click=move |_| {
                if let Err(e) = download_resume() {
                    log::warn!("{e}");
                    notify(Notification::DownloadFailed);
                }
            }
        >
            <i class="extra-download mr-2" />
            "Download Resume"
        </button>
    }
}
