//! Client-side pagination over a fully fetched collection.

use std::ops::Range;

use crate::{Resource, ResourceId};

/// Items shown per page in resource grids.
pub const PAGE_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// One-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero for an empty collection.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Index range of the current page within a collection of `count`.
    pub fn range(&self, count: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(count);
        let end = (start + self.page_size).min(count);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.current_page < self.total_pages(count)
    }

    pub fn next(&mut self, count: usize) {
        self.go_to(self.current_page + 1, count);
    }

    pub fn previous(&mut self, count: usize) {
        self.go_to(self.current_page.saturating_sub(1), count);
    }

    /// Jump to `page`, clamped to `[1, max(total_pages, 1)]`.
    pub fn go_to(&mut self, page: usize, count: usize) {
        let last = self.total_pages(count).max(1);
        self.current_page = page.clamp(1, last);
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the current page back into range after the collection shrank.
    pub fn clamp(&mut self, count: usize) {
        self.go_to(self.current_page, count);
    }
}

/// A fetched collection plus the page being viewed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceList<R: Resource> {
    items: Vec<R>,
    pagination: Pagination,
}

impl<R: Resource> Default for ResourceList<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

impl<R: Resource> ResourceList<R> {
    pub fn new(items: Vec<R>) -> Self {
        Self::with_page_size(items, PAGE_SIZE)
    }

    pub fn with_page_size(mut items: Vec<R>, page_size: usize) -> Self {
        R::sort(&mut items);
        Self {
            items,
            pagination: Pagination::new(page_size),
        }
    }

    /// Swap in a freshly fetched collection and return to page 1.
    pub fn replace(&mut self, mut items: Vec<R>) {
        R::sort(&mut items);
        self.items = items;
        self.pagination.reset();
    }

    /// Remove the item with `id`, keeping every other item. Returns whether
    /// anything was removed.
    pub fn remove(&mut self, id: &ResourceId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.pagination.clamp(self.items.len());
        self.items.len() != before
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Items on the current page.
    pub fn visible(&self) -> &[R] {
        self.pagination.slice(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.items.len())
    }

    pub fn has_next(&self) -> bool {
        self.pagination.has_next(self.items.len())
    }

    pub fn has_previous(&self) -> bool {
        self.pagination.has_previous()
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.items.len());
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous(self.items.len());
    }

    pub fn go_to(&mut self, page: usize) {
        self.pagination.go_to(page, self.items.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GrowthStep, Product};

    fn products(count: usize) -> Vec<Product> {
        (1..=count)
            .map(|n| Product {
                id: ResourceId(format!("p{n}")),
                name: format!("Product {n}"),
                description: String::new(),
                image: None,
                link: None,
            })
            .collect()
    }

    fn ids(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.id.0.as_str()).collect()
    }

    #[test]
    fn ten_products_paginate_and_delete() {
        let mut list = ResourceList::new(products(10));
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.total_pages(), 2);
        assert_eq!(list.visible().len(), 9);
        assert_eq!(ids(list.visible())[0], "p1");
        assert_eq!(ids(list.visible())[8], "p9");

        list.next_page();
        assert_eq!(list.current_page(), 2);
        assert_eq!(ids(list.visible()), vec!["p10"]);

        assert!(list.remove(&ResourceId::from("p10")));
        assert_eq!(list.total_pages(), 1);
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.visible().len(), 9);
    }

    #[test]
    fn total_pages_is_ceiling_of_count() {
        let pagination = Pagination::new(9);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(1), 1);
        assert_eq!(pagination.total_pages(9), 1);
        assert_eq!(pagination.total_pages(18), 2);
        assert_eq!(pagination.total_pages(19), 3);
    }

    #[test]
    fn visible_slice_length_matches_remaining_items() {
        for count in [0usize, 1, 8, 9, 10, 17, 27, 28] {
            let mut list = ResourceList::new(products(count));
            for page in 1..=list.total_pages() {
                list.go_to(page);
                let expected = PAGE_SIZE.min(count - (page - 1) * PAGE_SIZE);
                assert_eq!(list.visible().len(), expected, "count {count}");
            }
        }
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut list = ResourceList::new(products(3));
        list.previous_page();
        assert_eq!(list.current_page(), 1);
        list.next_page();
        assert_eq!(list.current_page(), 1);
        assert!(!list.has_next());

        let mut empty: ResourceList<Product> = ResourceList::new(vec![]);
        empty.next_page();
        assert_eq!(empty.current_page(), 1);
        assert!(empty.visible().is_empty());
    }

    #[test]
    fn go_to_clamps_out_of_range_pages() {
        let mut list = ResourceList::new(products(20));
        list.go_to(7);
        assert_eq!(list.current_page(), 3);
        assert_eq!(ids(list.visible()), vec!["p19", "p20"]);
        list.go_to(0);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn remove_only_drops_matching_id() {
        let mut list = ResourceList::new(products(5));
        assert!(list.remove(&ResourceId::from("p3")));
        assert_eq!(ids(list.items()), vec!["p1", "p2", "p4", "p5"]);
        assert!(!list.remove(&ResourceId::from("missing")));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn replace_resets_to_first_page() {
        let mut list = ResourceList::new(products(20));
        list.go_to(3);
        assert_eq!(list.current_page(), 3);
        list.replace(products(20));
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn growth_steps_are_sorted_on_load() {
        let steps: Vec<GrowthStep> = [3, 1, 2]
            .into_iter()
            .map(|number| GrowthStep {
                id: ResourceId(format!("s{number}")),
                number,
                title: format!("Step {number}"),
                description: String::new(),
                image: None,
            })
            .collect();
        let list = ResourceList::new(steps);
        let numbers: Vec<u32> = list.items().iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
