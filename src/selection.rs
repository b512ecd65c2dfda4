//! Page selection parsing
//!
//! A selection is built from tokens such as `"6"` or `"1-9"`. Every token
//! stands for one or more 1-based page numbers; the pages are taken in token
//! order without sorting or deduplication.
//!
//! Tokens are kept as parsed. Ranges are only walked page by page once the
//! selection has been checked against a document's page count.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::{Error, Result};

/// One selection token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSpec {
    /// A single page, e.g. `6`
    Page(u32),
    /// An inclusive range with `lo < hi`, e.g. `1-9`
    Range(u32, u32),
}

impl PageSpec {
    pub fn first(&self) -> u32 {
        match *self {
            PageSpec::Page(page) => page,
            PageSpec::Range(lo, _) => lo,
        }
    }

    pub fn last(&self) -> u32 {
        match *self {
            PageSpec::Page(page) => page,
            PageSpec::Range(_, hi) => hi,
        }
    }

    fn pages(&self) -> RangeInclusive<u32> {
        self.first()..=self.last()
    }
}

/// Ordered list of 1-based page numbers to extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    specs: Vec<PageSpec>,
}

impl PageSelection {
    /// Parse a list of selection tokens
    ///
    /// # Example
    ///
    /// ```
    /// use pdfmagic::PageSelection;
    ///
    /// let selection = PageSelection::parse(&["2", "5-6"]).unwrap();
    /// assert_eq!(selection.pages().collect::<Vec<_>>(), vec![2, 5, 6]);
    /// ```
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.is_empty() {
            return Err(Error::InvalidSelection(String::new()));
        }

        let specs = tokens
            .iter()
            .map(|token| parse_token(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { specs })
    }

    /// Parsed tokens in the order given
    pub fn specs(&self) -> &[PageSpec] {
        &self.specs
    }

    /// Selected page numbers in output order
    ///
    /// Ranges are walked lazily; an unvalidated selection may be very long.
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.specs.iter().flat_map(PageSpec::pages)
    }

    /// Number of pages the output will contain
    pub fn len(&self) -> usize {
        self.specs
            .iter()
            .map(|spec| (spec.last() - spec.first()) as usize + 1)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Check every selected page against the source document's page count
    ///
    /// Pages are 1-based, so 0 is rejected along with anything past the
    /// last page. The error names the first offending page in output order.
    pub fn validate(&self, path: &Path, page_count: u32) -> Result<()> {
        let past_end = page_count.saturating_add(1);
        let offending = self.specs.iter().find_map(|spec| {
            if spec.first() == 0 {
                Some(0)
            } else if spec.last() > page_count {
                Some(spec.first().max(past_end))
            } else {
                None
            }
        });

        match offending {
            Some(page) => Err(Error::PageOutOfRange {
                path: path.to_path_buf(),
                page,
                page_count,
            }),
            None => Ok(()),
        }
    }

    /// 0-based page indices in output order
    ///
    /// Validates against `page_count` first, so every index is in bounds.
    pub fn indices(
        &self,
        path: &Path,
        page_count: u32,
    ) -> Result<impl Iterator<Item = usize> + '_> {
        self.validate(path, page_count)?;
        Ok(self.pages().map(|page| page as usize - 1))
    }
}

/// Comma-joined page numbers, as used in default output names
impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", page)?;
        }
        Ok(())
    }
}

fn parse_token(token: &str) -> Result<PageSpec> {
    let parts: Vec<&str> = token.split('-').map(str::trim).collect();

    match parts.as_slice() {
        [page] => Ok(PageSpec::Page(parse_page_number(page, token)?)),
        [lo, hi] => {
            let lo = parse_page_number(lo, token)?;
            let hi = parse_page_number(hi, token)?;
            if lo >= hi {
                return Err(Error::InvalidRange {
                    token: token.to_string(),
                    lo,
                    hi,
                });
            }
            Ok(PageSpec::Range(lo, hi))
        }
        _ => Err(Error::InvalidSelection(token.to_string())),
    }
}

fn parse_page_number(part: &str, token: &str) -> Result<u32> {
    part.parse::<u32>()
        .map_err(|_| Error::InvalidSelection(token.to_string()))
}
