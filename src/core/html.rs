// src/core/html.rs
// Low-level HTML scanning helpers.
// Naive and tailored to the receipt report exports: flat tables,
// sometimes without closing tags. Case-insensitive on ASCII tag names.

use std::ops::Range;

use super::sanitize::decode_entities;

/// An opening tag with no closing `>` before end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unterminated {
    pub tag: &'static str,
    pub offset: usize,
}

/// One element located in a document: `start..end` spans the whole block,
/// `inner` just the content after the opening tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub start: usize,
    pub inner: Range<usize>,
    pub end: usize,
}

/// ASCII-only lowercasing. Byte offsets stay valid between `s` and the result.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find `marker` (e.g. `<td` or `</tr`) in `from..limit`, only where it is a
/// whole tag name: `<td` must not match `<tdata`.
fn find_marker(lc: &str, marker: &str, from: usize, limit: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(rel) = lc.get(pos..limit)?.find(marker) {
        let at = pos + rel;
        let after = at + marker.len();
        match lc.as_bytes().get(after) {
            None | Some(b'>') | Some(b'/') => return Some(at),
            Some(b) if b.is_ascii_whitespace() => return Some(at),
            _ => pos = after,
        }
    }
    None
}

/// Locate the next `<tag ...>` element at or after `from`.
///
/// `lc` must be `to_lower(doc)`. The element ends at the earliest of: its own
/// closing tag, the next opening of the same tag, any of `stops`, or end of input.
/// Receipt exports often omit `</td>`.
pub fn next_element(
    doc: &str,
    lc: &str,
    tag: &'static str,
    from: usize,
    stops: &[&str],
) -> Result<Option<Element>, Unterminated> {
    let open = join!("<", tag);
    let close = join!("</", tag);

    let Some(start) = find_marker(lc, &open, from, lc.len()) else {
        return Ok(None);
    };
    let open_end = match doc[start..].find('>') {
        Some(i) => start + i + 1,
        None => return Err(Unterminated { tag, offset: start }),
    };

    // Implicitly closed by the next sibling; each later search is bounded by
    // the end found so far.
    let mut inner_end = find_marker(lc, &open, open_end, lc.len()).unwrap_or(doc.len());
    let mut end = inner_end;

    if let Some(c) = find_marker(lc, &close, open_end, inner_end) {
        inner_end = c;
        end = lc[c..].find('>').map_or(doc.len(), |i| c + i + 1);
    }
    for stop in stops {
        if let Some(p) = find_marker(lc, stop, open_end, inner_end) {
            inner_end = p;
            end = p;
        }
    }

    Ok(Some(Element { start, inner: open_end..inner_end, end }))
}

/// Visible text of a cell: tags removed, entities decoded, each text run
/// trimmed, runs concatenated without a separator.
pub fn cell_text(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut run = String::new();
    let mut in_tag = false;

    fn flush(run: &mut String, out: &mut String) {
        if !run.is_empty() {
            out.push_str(decode_entities(run).trim());
            run.clear();
        }
    }

    for ch in inner.chars() {
        match ch {
            '<' => {
                flush(&mut run, &mut out);
                in_tag = true;
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => run.push(ch),
            _ => {}
        }
    }
    flush(&mut run, &mut out);
    out
}

/// Every `<tr>` in document order, each as the text of its `<td>` cells.
pub fn table_rows(doc: &str) -> Result<Vec<Vec<String>>, Unterminated> {
    let lc = to_lower(doc);
    let mut rows = Vec::new();
    let mut pos = 0usize;

    while let Some(tr) = next_element(doc, &lc, "tr", pos, &["</table"])? {
        pos = tr.end;

        let row = &doc[tr.inner.clone()];
        let row_lc = &lc[tr.inner.clone()];
        let mut cells = Vec::new();
        let mut td_pos = 0usize;

        loop {
            let td = next_element(row, row_lc, "td", td_pos, &[])
                .map_err(|e| Unterminated { offset: e.offset + tr.inner.start, ..e })?;
            let Some(td) = td else { break };
            cells.push(cell_text(&row[td.inner.clone()]));
            td_pos = td.end;
        }
        rows.push(cells);
    }

    Ok(rows)
}
