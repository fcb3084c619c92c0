// file: src/normalizer/relevance.rs
// description: splits delimited relevance cells and pairs segments with hyperlinks

use crate::models::RelevanceItem;
use crate::models::document::DEFAULT_LINK_SEPARATOR;

/// Which end of the hyperlink list the k-th segment is paired from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOrder {
    /// k-th segment takes `links[k]`; used for the native-language column.
    Forward,
    /// k-th segment takes `links[len - 1 - k]`; used for the foreign-language column.
    Reverse,
}

pub struct RelevanceBuilder<'a> {
    separator: &'a str,
    link_separator: &'a str,
    order: LinkOrder,
}

impl<'a> RelevanceBuilder<'a> {
    pub fn new(separator: &'a str, order: LinkOrder) -> Self {
        Self {
            separator,
            link_separator: DEFAULT_LINK_SEPARATOR,
            order,
        }
    }

    /// Text placed between a segment and its hyperlink when rendered.
    pub fn with_link_separator(mut self, link_separator: &'a str) -> Self {
        self.link_separator = link_separator;
        self
    }

    pub fn native(separator: &'a str) -> Self {
        Self::new(separator, LinkOrder::Forward)
    }

    pub fn foreign(separator: &'a str) -> Self {
        Self::new(separator, LinkOrder::Reverse)
    }

    /// Non-empty segments of `text`, each paired with the link at its position
    /// when one exists.
    pub fn build(&self, text: &str, links: &[String]) -> Vec<RelevanceItem> {
        text.split(self.separator)
            .filter(|segment| !segment.is_empty())
            .enumerate()
            .map(|(k, segment)| {
                RelevanceItem::new(segment, self.link_for(k, links))
                    .with_separator(self.link_separator)
            })
            .collect()
    }

    fn link_for(&self, k: usize, links: &[String]) -> Option<String> {
        let index = match self.order {
            LinkOrder::Forward => Some(k),
            LinkOrder::Reverse => links.len().checked_sub(k + 1),
        }?;
        links.get(index).cloned()
    }
}
