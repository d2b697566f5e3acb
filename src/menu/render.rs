//! Renderer: turns navigator state into character display calls.
//!
//! Rendering is a pure read of the tree and the focus. A list page starts
//! at the focused entry and follows `next` links, one entry per row; rows
//! past the last sibling stay blank.

use super::node::NodeId;
use super::tree::Tree;
use super::value::{resolve_value, ValueSource, ValueText};
use crate::config::{MenuConfig, FOCUS_GLYPH_INDEX};
use crate::ui::display::CharDisplay;

/// Fixed display size in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    pub cols: u8,
    pub rows: u8,
}

/// Longest prefix of `s` that fits in `width` cells.
fn fitted(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

pub(crate) fn draw<D, const N: usize>(
    display: &mut D,
    tree: &Tree<'_, N>,
    focus: Option<NodeId>,
    geometry: Geometry,
    config: &MenuConfig,
) -> Result<(), D::Error>
where
    D: CharDisplay,
{
    display.clear()?;

    if let Some(node) = focus.and_then(|id| tree.resolve(id).ok()) {
        if node.is_value_view() {
            draw_value(display, node.title(), node.source().as_ref(), geometry, config)?;
        } else {
            draw_list(display, tree, focus, geometry)?;
        }
    }

    display.flush()
}

fn draw_value<D: CharDisplay>(
    display: &mut D,
    title: &str,
    source: Option<&ValueSource<'_>>,
    geometry: Geometry,
    config: &MenuConfig,
) -> Result<(), D::Error> {
    let cols = geometry.cols as usize;
    if geometry.rows == 0 || cols == 0 {
        return Ok(());
    }

    display.set_cursor(0, 0)?;
    match config.title_delimiter {
        Some(delimiter) => {
            display.write_text(fitted(title, cols - 1))?;
            let mut buf = [0u8; 4];
            display.write_text(delimiter.encode_utf8(&mut buf))?;
        }
        None => display.write_text(fitted(title, cols))?,
    }

    if geometry.rows > 1 {
        let mut value = ValueText::new();
        resolve_value(source, &mut value);
        display.set_cursor(0, 1)?;
        display.write_text(fitted(value.as_str(), cols))?;
    }
    Ok(())
}

fn draw_list<D: CharDisplay, const N: usize>(
    display: &mut D,
    tree: &Tree<'_, N>,
    focus: Option<NodeId>,
    geometry: Geometry,
) -> Result<(), D::Error> {
    if geometry.cols == 0 {
        return Ok(());
    }
    let width = geometry.cols as usize - 1;

    for (row, id) in tree.siblings(focus).take(geometry.rows as usize).enumerate() {
        let Ok(node) = tree.resolve(id) else {
            break;
        };
        display.set_cursor(0, row as u8)?;
        if row == 0 {
            display.write_glyph(FOCUS_GLYPH_INDEX)?;
        } else {
            display.write_text(" ")?;
        }
        display.write_text(fitted(node.title(), width))?;
    }
    Ok(())
}

/// Static splash page: up to `rows` lines, left aligned.
pub(crate) fn splash<D: CharDisplay>(
    display: &mut D,
    lines: &[&str],
    geometry: Geometry,
) -> Result<(), D::Error> {
    display.clear()?;
    for (row, line) in lines.iter().take(geometry.rows as usize).enumerate() {
        display.set_cursor(0, row as u8)?;
        display.write_text(fitted(line, geometry.cols as usize))?;
    }
    display.flush()
}

#[cfg(test)]
mod tests {
    use super::fitted;

    #[test]
    fn fitted_cuts_on_char_boundaries() {
        assert_eq!(fitted("Brightness", 4), "Brig");
        assert_eq!(fitted("Brightness", 40), "Brightness");
        assert_eq!(fitted("°C°C", 3), "°C°");
        assert_eq!(fitted("abc", 0), "");
    }
}
