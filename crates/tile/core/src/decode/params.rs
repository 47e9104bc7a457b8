//! Segment and parameter splitting for the tile-code format.
//!
//! ```text
//! city=revenue:30,slots:2;path=a:0,b:_0;label=OO
//! ^^^^ ^^^^^^^^^^ ^^^^^^^
//! type   param     param
//! ```

use core::num::ParseIntError;
use core::str::FromStr;

use super::DecodeError;

/// One `type=params` segment of a tile code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub kind: &'a str,
    /// Everything after `=`, untouched. Labels use it verbatim.
    pub raw: &'a str,
    pub params: Params<'a>,
}

impl<'a> Segment<'a> {
    /// Splits a segment; returns `None` for blank segments (`a;;b`, trailing `;`).
    pub fn parse(segment: &'a str) -> Option<Self> {
        let segment = segment.trim();
        if segment.is_empty() {
            return None;
        }

        let (kind, raw) = segment.split_once('=').unwrap_or((segment, ""));
        Some(Self {
            kind: kind.trim(),
            raw: raw.trim(),
            params: Params { raw: raw.trim() },
        })
    }
}

/// Comma-separated `key:value` parameters. A bare `key` has an empty value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Params<'a> {
    raw: &'a str,
}

impl<'a> Params<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        self.raw
            .split(',')
            .map(str::trim)
            .filter(|param| !param.is_empty())
            .map(|param| {
                let (key, value) = param.split_once(':').unwrap_or((param, ""));
                (key.trim(), value.trim())
            })
    }

    /// Value of the last occurrence of `key`.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.iter().filter(|(k, _)| *k == key).map(|(_, v)| v).last()
    }

    pub fn require(&self, part: &'static str, key: &'static str) -> Result<&'a str, DecodeError> {
        self.get(key).ok_or(DecodeError::MissingParam { part, key })
    }

    /// Flags are set by presence; `0` and `false` switch them off explicitly.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|value| !matches!(value, "0" | "false"))
    }

    pub fn parse<T: FromStr>(
        &self,
        part: &'static str,
        key: &'static str,
    ) -> Result<Option<T>, DecodeError> {
        self.get(key)
            .map(|value| {
                value.parse::<T>().map_err(|_| DecodeError::InvalidValue {
                    part,
                    key,
                    value: value.to_string(),
                })
            })
            .transpose()
    }

    /// `|`-separated list, empty when the key is absent.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split('|')
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Keys present that the given part does not understand.
    pub fn unknown_keys(&self, known: &[&str]) -> Vec<&'a str> {
        self.iter()
            .map(|(key, _)| key)
            .filter(|key| !known.contains(key))
            .collect()
    }
}

/// Parses `_N` into `N`. Returns `None` for anything that is not a back-reference.
pub(crate) fn back_reference(token: &str) -> Option<Result<usize, ParseIntError>> {
    let digits = token.strip_prefix('_')?;
    Some(digits.parse::<usize>())
}
