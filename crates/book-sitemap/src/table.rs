//! Built-in table of contents of the C++ book.

use crate::sitemap::SectionEntry;

type SectionDef = (&'static str, Option<&'static str>, &'static [(&'static str, &'static str)]);

const CPP_BOOK: &[SectionDef] = &[
    ("Introduction", None, &[("Index", "")]),
    (
        "Basics",
        Some("basics"),
        &[
            ("Terminology", "terminology"),
            ("Simplest Program", "simple"),
            ("Console Input/Output", "io"),
            ("Variables", "variables"),
            ("Data Types", "data-types"),
            ("Operators", "operators"),
        ],
    ),
    (
        "The Standard Library Datatypes",
        Some("std"),
        &[
            ("Strings", "strings"),
            ("Vectors", "vectors"),
            ("Maps TODO", "maps"),
            ("Sets TODO", "sets"),
        ],
    ),
    (
        "Control Structures",
        Some("control-structures"),
        &[
            ("Conditions", "conditions"),
            ("Loops", "loops"),
            ("Iterators", "iterators"),
        ],
    ),
    (
        "Memory Management",
        Some("memory"),
        &[
            ("Stack vs Heap", "stack-heap"),
            ("Pointers", "pointers"),
            ("Smart Pointers", "smart-pointers"),
            ("Arrays", "arrays"),
        ],
    ),
    (
        "Functions",
        Some("functions"),
        &[
            ("Function Basics", "basics"),
            ("Function Overloading", "overloading"),
            ("First Order Functions", "first-order"),
        ],
    ),
    (
        "Code Splitting",
        Some("files"),
        &[("Splitting Code", "splitting"), ("Header Files", "headers")],
    ),
    (
        "Object Oriented Programming",
        Some("oop"),
        &[
            ("Classes", "classes"),
            ("Class Header Files", "headers"),
            ("Destructors", "destructors"),
            ("Inheritance", "inheritance"),
            ("Polymorphism", "polymorphism"),
            ("Interfaces", "interfaces"),
            ("Templates", "templates"),
        ],
    ),
];

/// Sections of the C++ book in reading order.
#[must_use]
pub fn cpp_book_sections() -> Vec<SectionEntry> {
    CPP_BOOK
        .iter()
        .map(|&(name, base, pages)| SectionEntry::new(name, base, pages))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasePath, Sitemap};

    #[test]
    fn test_builtin_table_links_unique() {
        let sitemap = Sitemap::new(BasePath::default(), cpp_book_sections());

        assert!(sitemap.is_ok(), "{:?}", sitemap.err());
    }

    #[test]
    fn test_builtin_table_page_count() {
        let sections = cpp_book_sections();
        let expected: usize = sections.iter().map(|s| s.pages.len()).sum();
        let sitemap = Sitemap::new(BasePath::default(), sections).unwrap();

        assert_eq!(sitemap.len(), expected);
        assert_eq!(sitemap.len(), 30);
        assert_eq!(sitemap.sections().len(), 8);
    }

    #[test]
    fn test_builtin_table_links_under_base_with_single_trailing_slash() {
        let sitemap = Sitemap::new(BasePath::default(), cpp_book_sections()).unwrap();

        for page in sitemap.flat_map() {
            assert!(page.link.starts_with("/cpp-book/"), "{}", page.link);
            assert!(page.link.ends_with('/'), "{}", page.link);
            assert!(!page.link.ends_with("//"), "{}", page.link);
            assert!(!page.link.contains("//"), "{}", page.link);
        }
        assert_eq!(sitemap.flat_map().len(), 30);
    }

    #[test]
    fn test_builtin_table_reading_order_endpoints() {
        let sitemap = Sitemap::new(BasePath::default(), cpp_book_sections()).unwrap();
        let flat = sitemap.flat_map();

        assert_eq!(flat[0].name, "Index");
        assert_eq!(flat[0].link, "/cpp-book/");
        assert_eq!(flat[1].link, "/cpp-book/basics/terminology/");
        assert_eq!(flat[flat.len() - 1].link, "/cpp-book/oop/templates/");
    }

    #[test]
    fn test_builtin_table_crosses_section_boundary() {
        let sitemap = Sitemap::new(BasePath::default(), cpp_book_sections()).unwrap();

        let neighbors = sitemap.neighbors("/cpp-book/std/strings/");

        assert_eq!(neighbors.prev.unwrap().link, "/cpp-book/basics/operators/");
        assert_eq!(neighbors.next.unwrap().link, "/cpp-book/std/vectors/");
    }

    #[test]
    fn test_same_segment_in_different_sections() {
        let sitemap = Sitemap::new(BasePath::default(), cpp_book_sections()).unwrap();

        assert!(sitemap.position("/cpp-book/files/headers/").is_some());
        assert!(sitemap.position("/cpp-book/oop/headers/").is_some());
        assert!(sitemap.position("/cpp-book/functions/basics/").is_some());
        assert!(sitemap.position("/cpp-book/basics/").is_none());
    }
}
