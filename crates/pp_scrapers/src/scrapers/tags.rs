use pp_core::Result;
use scraper::{ElementRef, Selector};

use super::utils::{element_text, selector};

/// Where free-text tags live inside a release fragment.
#[derive(Debug, Clone, Copy)]
pub struct TagSelectors {
    pub list: &'static str,
    pub item: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct CompiledTags {
    list: Selector,
    item: Selector,
    label: Selector,
}

impl CompiledTags {
    pub fn compile(tags: &TagSelectors) -> Result<Self> {
        Ok(Self {
            list: selector(tags.list)?,
            item: selector(tags.item)?,
            label: selector(tags.label)?,
        })
    }
}

/// Tag labels in document order. Items without a label link are skipped.
pub fn extract_tags(fragment: ElementRef<'_>, tags: &CompiledTags) -> Vec<String> {
    let Some(list) = fragment.select(&tags.list).next() else {
        return Vec::new();
    };
    list.select(&tags.item)
        .filter_map(|item| item.select(&tags.label).next())
        .map(element_text)
        .collect()
}
