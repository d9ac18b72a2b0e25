//! HTML escaping
//!
//! Only `&`, `<` and `>` are escaped. Escaped text keeps a record of
//! where each entity sits so positions found by matching against the
//! escaped form can be mapped back onto the raw input.

/// Escape `&`, `<` and `>` in `text`
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Append `text` to `out`, escaped
pub fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match entity_for(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
}

fn entity_for(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

/// One entity in escaped text
#[derive(Debug, Clone, Copy)]
struct Entity {
    /// Escaped offset of the `&`
    start: usize,
    /// Escaped offset just past the `;`
    end: usize,
    /// Bytes added by escaping, up to and including this entity
    added: usize,
}

/// Escaped text that can map its offsets back to the raw input
#[derive(Debug, Clone)]
pub struct EscapedText {
    text: String,
    entities: Vec<Entity>,
}

impl EscapedText {
    /// Escape `raw`, remembering where entities were introduced
    pub fn new(raw: &str) -> Self {
        let mut text = String::with_capacity(raw.len());
        let mut entities = Vec::new();
        let mut added = 0;

        for c in raw.chars() {
            match entity_for(c) {
                Some(entity) => {
                    let start = text.len();
                    text.push_str(entity);
                    added += entity.len() - c.len_utf8();
                    entities.push(Entity {
                        start,
                        end: text.len(),
                        added,
                    });
                }
                None => text.push(c),
            }
        }

        Self { text, entities }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether `pos` falls strictly inside an entity
    pub fn splits_entity(&self, pos: usize) -> bool {
        let idx = self.entities.partition_point(|e| e.end <= pos);
        self.entities.get(idx).is_some_and(|e| e.start < pos)
    }

    /// Map an escaped offset that does not split an entity to a raw offset
    pub fn raw_offset(&self, pos: usize) -> usize {
        let idx = self.entities.partition_point(|e| e.end <= pos);
        let added = if idx == 0 { 0 } else { self.entities[idx - 1].added };
        pos - added
    }
}
