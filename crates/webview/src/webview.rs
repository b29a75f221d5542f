use std::rc::Rc;

use gpui::{
    App, Bounds, Context, FocusHandle, Focusable, InteractiveElement, IntoElement, ParentElement,
    Pixels, Render, Styled, Window, canvas, div,
};
use wry::dpi::{LogicalPosition, LogicalSize};

/// A native web view laid out as a gpui element.
///
/// The view floats above the gpui window; its bounds follow whatever space the
/// element is given on every frame.
pub struct WebView {
    focus_handle: FocusHandle,
    webview: Rc<wry::WebView>,
    visible: bool,
}

impl WebView {
    pub fn new(webview: wry::WebView, _window: &mut Window, cx: &mut App) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            webview: Rc::new(webview),
            visible: true,
        }
    }

    pub fn show(&mut self) {
        self.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if let Err(err) = self.webview.set_visible(visible) {
            log::warn!("failed to change webview visibility: {err}");
        }
    }

    /// Shared handle for code that drives the page outside of rendering.
    pub fn inner(&self) -> Rc<wry::WebView> {
        self.webview.clone()
    }

    pub fn focus_page(&self) {
        if let Err(err) = self.webview.focus() {
            log::debug!("failed to focus webview: {err}");
        }
    }
}

impl Focusable for WebView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for WebView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let webview = self.webview.clone();
        let visible = self.visible;

        div().track_focus(&self.focus_handle).size_full().child(
            canvas(
                move |bounds, _, _| {
                    if visible {
                        sync_bounds(&webview, bounds);
                    }
                },
                |_, _, _, _| {},
            )
            .size_full(),
        )
    }
}

fn sync_bounds(webview: &wry::WebView, bounds: Bounds<Pixels>) {
    let rect = wry::Rect {
        position: LogicalPosition::new(f64::from(bounds.origin.x), f64::from(bounds.origin.y))
            .into(),
        size: LogicalSize::new(
            f64::from(bounds.size.width),
            f64::from(bounds.size.height),
        )
        .into(),
    };
    if let Err(err) = webview.set_bounds(rect) {
        log::warn!("failed to position webview: {err}");
    }
}
