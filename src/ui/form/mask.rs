//! Input masks for text fields.
//!
//! A pattern mask is written with `9` for a digit, `a` for an ASCII letter,
//! `*` for an ASCII letter or digit. Any other character is a literal that
//! is inserted automatically; `\` makes the next character literal.

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Digit,
    Letter,
    Alphanumeric,
    Literal(char),
}

impl Slot {
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_ascii_alphabetic(),
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
            Self::Literal(literal) => literal == c,
        }
    }
}

#[derive(Clone)]
enum Kind {
    Pattern(Arc<[Slot]>),
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

/// Constrains and formats what a user types into a field.
#[derive(Clone)]
pub struct InputMask {
    kind: Kind,
}

impl fmt::Debug for InputMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Pattern(slots) => f.debug_tuple("InputMask::Pattern").field(&slots.len()).finish(),
            Kind::Custom(_) => f.write_str("InputMask::Custom"),
        }
    }
}

impl InputMask {
    /// Parses a pattern such as `99999-999` or `(99) 9999-9999`.
    #[must_use]
    pub fn pattern(pattern: &str) -> Self {
        let mut slots = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            let slot = match c {
                '9' => Slot::Digit,
                'a' => Slot::Letter,
                '*' => Slot::Alphanumeric,
                '\\' => match chars.next() {
                    Some(escaped) => Slot::Literal(escaped),
                    None => Slot::Literal('\\'),
                },
                other => Slot::Literal(other),
            };
            slots.push(slot);
        }

        Self {
            kind: Kind::Pattern(slots.into()),
        }
    }

    /// Wraps an arbitrary transformation of the raw input.
    pub fn custom<F>(transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            kind: Kind::Custom(Arc::new(transform)),
        }
    }

    /// Formats `raw` according to the mask.
    ///
    /// ```rust
    /// use quarry_ui::ui::form::InputMask;
    ///
    /// let zip = InputMask::pattern("99999-999");
    /// assert_eq!(zip.apply("01310100"), "01310-100");
    /// assert_eq!(zip.apply("0131x"), "0131");
    /// ```
    #[must_use]
    pub fn apply(&self, raw: &str) -> String {
        match &self.kind {
            Kind::Custom(transform) => transform(raw),
            Kind::Pattern(slots) => apply_pattern(slots, raw),
        }
    }
}

impl From<&str> for InputMask {
    fn from(pattern: &str) -> Self {
        Self::pattern(pattern)
    }
}

fn apply_pattern(slots: &[Slot], raw: &str) -> String {
    let mut out = String::with_capacity(slots.len());
    let mut slot_index = 0;

    for c in raw.chars() {
        if slot_index >= slots.len() {
            break;
        }

        // A typed literal that matches the upcoming literal slot consumes it.
        if let Slot::Literal(literal) = slots[slot_index] {
            if literal == c {
                out.push(c);
                slot_index += 1;
                continue;
            }
        }

        let mut cursor = slot_index;
        let mut literals = String::new();
        while let Some(Slot::Literal(literal)) = slots.get(cursor) {
            literals.push(*literal);
            cursor += 1;
        }

        match slots.get(cursor) {
            Some(slot) if slot.accepts(c) => {
                out.push_str(&literals);
                out.push(c);
                slot_index = cursor + 1;
            }
            // Character fits no slot; drop it.
            _ => {}
        }
    }

    out
}
