// Accessibility helpers

use crate::root::DomError;
use web_sys::Document;

/// Id of the `<style>` element holding [`panel_css`].
pub const STYLE_ELEMENT_ID: &str = "prefpanel-style";

/// Get CSS for the floating panel, its hidden state and visible focus indicators
///
/// Selectors use classes so configured element ids do not affect styling.
/// Site stylesheets are expected to react to the `data-theme`, `data-font-size`
/// and `data-contrast` attributes on `<html>`.
#[must_use]
pub const fn panel_css() -> &'static str {
    ".a11y-panel{position:fixed;right:1rem;bottom:1rem;z-index:1000;font-family:inherit}\
.a11y-toggle{width:3rem;height:3rem;border-radius:50%;cursor:pointer;display:flex;align-items:center;justify-content:center}\
.a11y-menu{position:absolute;right:0;bottom:3.5rem;min-width:16rem;padding:1rem;border-radius:.5rem;background:var(--bg,#111);color:var(--text,#eee);border:1px solid var(--border,#444)}\
.a11y-menu.hidden{display:none}\
.a11y-section{margin-bottom:.75rem}\
.a11y-section h4{margin:0 0 .25rem}\
.btn-group{display:flex;gap:.25rem}\
.btn-group button[aria-pressed=true]{outline:2px solid currentColor}\
.a11y-reset{width:100%;margin-top:.5rem;padding:.5rem;background:transparent;border:1px solid var(--border,#444);color:var(--text-muted,#aaa);cursor:pointer}\
.a11y-panel :focus{outline:3px solid #00D9C0;outline-offset:2px}\
.sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Inject [`panel_css`] into `<head>` once.
///
/// # Errors
/// Returns an error if the `<style>` element cannot be created or attached.
pub fn inject_styles(document: &Document) -> Result<(), DomError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(panel_css()));
    document
        .head()
        .ok_or(DomError::NoHead)?
        .append_child(&style)?;
    Ok(())
}
