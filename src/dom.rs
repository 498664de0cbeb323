use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport width in CSS px; 0 if the window can't tell.
#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`; an invalid selector yields none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Canvas plus its 2-D context, or an error saying which step failed.
pub fn canvas_2d(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>> {
    let Some(el) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("#{id} getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("#{id} has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("#{id} context cast failed: {:?}", e))?;
    Ok(Some((canvas, ctx)))
}

/// How a canvas derives its backing size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sizing {
    Viewport,
    Parent,
}

/// Matches the canvas backing store to its layout box (CSS px, no DPR scaling)
/// and returns the new size.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, sizing: Sizing) -> (u32, u32) {
    let (w, h) = match sizing {
        Sizing::Viewport => (viewport_width(), viewport_height()),
        Sizing::Parent => canvas
            .parent_element()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
            .map(|p| (p.offset_width() as f64, p.offset_height() as f64))
            .unwrap_or((0.0, 0.0)),
    };
    let (w_px, h_px) = (w.max(0.0) as u32, h.max(0.0) as u32);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_body_overflow(document: &web::Document, value: &str) {
    if let Some(body) = document.body() {
        set_style(&body, "overflow", value);
    }
}
