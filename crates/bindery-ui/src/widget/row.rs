//! Review row construction.
//!
//! Cell structure and class names are the fixed contract with the store's
//! stylesheet: a `row p-3` container holding a profile cell, a contents cell,
//! and a delete cell. Text fields are assigned through `set_text_content`, so
//! markup in review bodies renders inert; the profile picture URL travels
//! as-is.

use crate::logic::ROW_MARKER;
use crate::models::ReviewRow;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

/// One rendered review row plus the handles the caller wires afterwards.
pub(crate) struct BuiltRow {
    /// Root element to insert into the modal surface.
    pub element: Element,
    /// Trash icon dispatching the review's removal.
    pub delete_icon: Element,
    /// Reviewer id duplicated from the row's hidden field.
    pub user_id: String,
}

fn element_with_classes(
    document: &Document,
    tag: &str,
    classes: &str,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_class_name(classes);
    Ok(element)
}

fn profile_cell(document: &Document, review: &ReviewRow) -> Result<Element, JsValue> {
    let cell = element_with_classes(document, "div", "col-1")?;

    let picture: HtmlImageElement = document
        .create_element("img")?
        .dyn_into()
        .map_err(JsValue::from)?;
    picture.set_src(&review.profile_pic);
    picture.set_alt(&review.username);
    picture.set_class_name("img-wrapper profile-picture");

    cell.append_child(&picture)?;
    Ok(cell)
}

fn contents_cell(document: &Document, review: &ReviewRow) -> Result<Element, JsValue> {
    // Holds the metadata strip and the review body.
    let cell = element_with_classes(document, "div", "col-10 flex-column")?;
    let metadata = element_with_classes(document, "div", "d-inline-flex flex-row")?;

    let username = element_with_classes(document, "div", "review-username p-2")?;
    username.set_text_content(Some(&review.username));
    let time = element_with_classes(document, "div", "review-time p-2")?;
    time.set_text_content(Some(&review.time));
    let rating = element_with_classes(document, "div", "p-2")?;
    rating.set_text_content(Some(&review.rating));

    metadata.append_child(&username)?;
    metadata.append_child(&time)?;
    metadata.append_child(&rating)?;

    let content = element_with_classes(document, "div", "review-content p-2")?;
    content.set_text_content(Some(&review.content));

    cell.append_child(&metadata)?;
    cell.append_child(&content)?;
    Ok(cell)
}

fn delete_cell(document: &Document, review: &ReviewRow) -> Result<(Element, Element), JsValue> {
    let cell = element_with_classes(document, "div", "col-1")?;

    let user_id = document.create_element("input")?;
    user_id.set_attribute("type", "hidden")?;
    user_id.set_attribute("value", &review.user_id)?;
    user_id.set_class_name("review_user_id");

    let icon = element_with_classes(document, "i", "fa fa-trash")?;

    cell.append_child(&user_id)?;
    cell.append_child(&icon)?;
    Ok((cell, icon))
}

/// Assemble the three-cell row for one review, tagged with the purge marker.
pub(crate) fn build_row(document: &Document, review: &ReviewRow) -> Result<BuiltRow, JsValue> {
    let element = element_with_classes(document, "div", "row p-3")?;
    element.set_attribute(ROW_MARKER, "")?;

    element.append_child(&profile_cell(document, review)?)?;
    element.append_child(&contents_cell(document, review)?)?;
    let (cell, delete_icon) = delete_cell(document, review)?;
    element.append_child(&cell)?;

    Ok(BuiltRow {
        element,
        delete_icon,
        user_id: review.user_id.clone(),
    })
}

/// Build the inline failure row shown when a fetch fails.
///
/// Carries the purge marker so the next successful open-cycle sweeps it away
/// with the rest of the widget-owned content.
pub(crate) fn build_error_row(document: &Document, message: &str) -> Result<Element, JsValue> {
    let element = element_with_classes(document, "div", "row p-3 review-error")?;
    element.set_attribute(ROW_MARKER, "")?;
    element.set_text_content(Some(message));
    Ok(element)
}
