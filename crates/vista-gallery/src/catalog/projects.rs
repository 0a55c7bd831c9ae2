//! Project categories
//!
//! A `Subfolders` category holds one folder per project; its tiles probe a
//! thumbnail and a slide list inside that folder. A `Flat` category holds
//! single image files shown as-is.

use crate::naming::{clean_project_name, extract_number, strip_extension};
use serde::Serialize;
use vista_path::encode_path;

/// How a category stores its projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// One folder per project, images numbered inside
    Subfolders,
    /// One image file per project
    Flat,
}

/// One project category as listed on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCategory {
    /// Category name (also the filter label)
    pub name: &'static str,
    /// Storage layout
    pub kind: CategoryKind,
    /// Folder holding the entries
    pub base: &'static str,
    /// Folder names or file names, in listing order
    pub items: &'static [&'static str],
}

/// Every project category, in filter-tab order
pub static PROJECT_CATEGORIES: [ProjectCategory; 5] = [
    ProjectCategory {
        name: "Industrial",
        kind: CategoryKind::Subfolders,
        base: "Projects/Industrial",
        items: &[
            "1. Asian Granito Limited",
            "2. SRC Pvt.Ltd",
            "3. SSIPL FB-2 & 3",
            "4. Brimax",
            "5. Huntsman International",
            "6. Waree CB-1 & 2",
            "7. UPL MAXPRO LAB Unit",
            "8. UPL QAQC LAB Unit",
            "9. XL Plastics",
            "10. YRPL",
            "11. Shree Chemopharma",
            "12. Precision Engineering",
            "13. KDI Limited",
            "14. Diamines Ltd",
            "15. HLE Glascoat",
            "16. SSIPL FB-1",
            "17. SSIPL HQ",
            "18. GNFC",
            "19. DNL H2SO4 Plant",
            "20. DRI Steel Plant",
            "21. Evexia Pharma",
            "22. Finolex",
            "23. Red Ridge Global",
            "24. ICTPL",
            "25. HIIPL Boiler house",
            "27. Narayan Powertech",
            "28. ZORBA  Aluminium Processing Unit",
            "29. Rubamin",
            "30. Renown Pharma",
            "31. Metso India Pvt.Ltd",
            "32. Industrial Chimneys",
            "33. Liquid Retaining Structures",
            "34. O&G Plants",
            "35. Pipe Racks and Supports",
            "36. Pure Remedies",
            "37. Scaffolding Design",
            "38. Dyes Formulation Plant HIIPL",
            "39. Capex Reduction for ABL",
        ],
    },
    ProjectCategory {
        name: "Institutional and Public Buildings",
        kind: CategoryKind::Subfolders,
        base: "Projects/Institutional and Public Buildings",
        items: &[
            "1. AAI Bareilly Airport",
            "2. Maharaja Ranjitsinh Institute  of Design , MSU",
            "3. Institue of Fashion Technology,MSU",
            "4. Faculty of Social works,MSU",
            "5. Pandit Deendayal Auditorium, MSU",
            "6. Institute Policy Research and International Studies,MSU",
            "7. Faculty of Pharmacy,MSU",
            "8. Kanta Stri Vikas Gruh",
            "9. XL Smiles Dr.Praptis clinic",
            "10. Essential Esthetics Dr.Neha Shah",
            "11. Institute of Management Studies, MSU",
            "12. GSFC hostel Building",
        ],
    },
    ProjectCategory {
        name: "Recreational and Hospitality",
        kind: CategoryKind::Subfolders,
        base: "Projects/Recreational and Hospitality",
        items: &[
            "1. Fortune Park Baroda Dahej",
            "2. Lemon Tree Hotel",
            "3. Fern Narmada Nihar SOU",
            "4. Prakruti Resort",
            "5. Kavery Rajkot",
            "6. Hotel Airport",
            "7. Chowki Dhani Hotels",
        ],
    },
    ProjectCategory {
        name: "Residential",
        kind: CategoryKind::Flat,
        base: "Projects/Residential",
        items: &["1.png", "2.png", "3.png"],
    },
    ProjectCategory {
        name: "Unique Projects",
        kind: CategoryKind::Flat,
        base: "Projects/Unique Projects",
        items: &[
            "4.jpg", "2.jpg", "3.png", "1.png", "6.jpg", "5.jpg", "8.png", "7.png", "10.png",
        ],
    },
];

/// Look up a category by name
#[must_use]
pub fn category(name: &str) -> Option<&'static ProjectCategory> {
    PROJECT_CATEGORIES.iter().find(|c| c.name == name)
}

/// One project tile's source entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectItem {
    /// Category name
    pub category: &'static str,
    /// Storage layout
    pub kind: CategoryKind,
    /// Category folder
    pub base: &'static str,
    /// Folder name (`Subfolders`) or file name (`Flat`)
    pub entry: &'static str,
}

impl ProjectItem {
    /// Encoded project folder, for `Subfolders` items
    #[must_use]
    pub fn folder(&self) -> Option<String> {
        match self.kind {
            CategoryKind::Subfolders => Some(encode_path([self.base, self.entry])),
            CategoryKind::Flat => None,
        }
    }

    /// Encoded image path, for `Flat` items
    #[must_use]
    pub fn file(&self) -> Option<String> {
        match self.kind {
            CategoryKind::Flat => Some(encode_path([self.base, self.entry])),
            CategoryKind::Subfolders => None,
        }
    }

    /// Tile title
    #[must_use]
    pub fn title(&self) -> String {
        match self.kind {
            CategoryKind::Subfolders => clean_project_name(self.entry),
            CategoryKind::Flat => clean_project_name(strip_extension(self.entry)),
        }
    }

    /// Tile image alt text
    #[must_use]
    pub fn alt(&self) -> String {
        format!("{} - {}", self.category, clean_project_name(self.entry))
    }
}

/// Entries of one category sorted by numeric prefix
///
/// Unnumbered entries sort last; ties keep listing order.
#[must_use]
pub fn category_items(category: &'static ProjectCategory) -> Vec<ProjectItem> {
    let mut entries: Vec<&'static str> = category.items.to_vec();
    entries.sort_by_key(|e| extract_number(e));
    entries
        .into_iter()
        .map(|entry| ProjectItem {
            category: category.name,
            kind: category.kind,
            base: category.base,
            entry,
        })
        .collect()
}

/// Every project item, category by category
#[must_use]
pub fn all_items() -> Vec<ProjectItem> {
    PROJECT_CATEGORIES.iter().flat_map(category_items).collect()
}
