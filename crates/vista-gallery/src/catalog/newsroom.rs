//! Newsroom groups
//!
//! Each group lists the files its folder is expected to hold. Listings may
//! be stale; files are verified before they reach a slide viewer.

use vista_path::encode_path;

/// One newsroom story with its image folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsroomGroup {
    /// Story title
    pub title: String,
    /// Folder (unencoded)
    pub base: String,
    /// Listed file names, first one used as the thumbnail
    pub images: Vec<String>,
}

impl NewsroomGroup {
    /// Create group
    pub fn new<I, S>(title: impl Into<String>, base: impl Into<String>, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            base: base.into(),
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    /// Encoded folder path
    #[inline]
    #[must_use]
    pub fn encoded_base(&self) -> String {
        encode_path([self.base.as_str()])
    }

    /// Encoded path of the first listed image
    #[must_use]
    pub fn thumbnail(&self) -> Option<String> {
        self.images
            .first()
            .map(|file| encode_path([self.base.as_str(), file.as_str()]))
    }
}

const GROUPS: [(&str, &str, &[&str]); 4] = [
    (
        "Bareilly Airport Inaugration Ceremony",
        "News Room/Bareilly Airport Inaugration Ceremony",
        &["1.jpg", "1.png", "2.jpg", "3.jpg", "4.jpg", "4.png", "5.jpg"],
    ),
    (
        "Dr. Madhvi Lata Vadodara",
        "News Room/Dr. Madhvi Lata Vadodara",
        &["1.png", "2.png", "3.png", "4.png", "5.png", "6.png"],
    ),
    (
        "IGBC Vadodara",
        "News Room/IGBC Vadodara",
        &[
            "1.jpeg",
            "1739301439486.jpeg",
            "1739301475984.jpeg",
            "1739301477745.jpeg",
            "1739301480697.jpeg",
            "1739301480737.jpeg",
        ],
    ),
    (
        "KBS Architecture in PEB",
        "News Room/KBS Architecture in PEB",
        &[
            "1.jpg",
            "1a.jpg",
            "2.JPG",
            "3.JPG",
            "4.JPG",
            "63f18bd5-bd48-415c-a1a4-58223704c07f.JPG",
            "6569a13a-3483-4bde-b8fb-fae4623b0b00.JPG",
            "8177fc98-35c0-4d34-8912-c8966ddb54d2.JPG",
            "a81b7698-9fca-4517-9bc6-2db2c053c111.JPG",
            "c89cd20b-7cef-4cf1-be6b-d174d0b3d2ce.JPG",
            "cd8fe10f-8500-4817-b139-0a2ae8e9d8e3.JPG",
            "e995f6fe-df4b-4f96-be22-89aeaf0771bb.JPG",
        ],
    ),
];

/// Site newsroom groups, in page order
#[must_use]
pub fn newsroom_groups() -> Vec<NewsroomGroup> {
    GROUPS
        .iter()
        .map(|(title, base, images)| NewsroomGroup::new(*title, *base, images.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_is_first_listed_file() {
        let groups = newsroom_groups();
        assert_eq!(groups.len(), 4);
        assert_eq!(
            groups[2].thumbnail().as_deref(),
            Some("News%20Room/IGBC%20Vadodara/1.jpeg")
        );
        assert_eq!(groups[3].encoded_base(), "News%20Room/KBS%20Architecture%20in%20PEB");
    }

    #[test]
    fn group_without_images_has_no_thumbnail() {
        let group = NewsroomGroup::new("Empty", "News Room/Empty", Vec::<String>::new());
        assert_eq!(group.thumbnail(), None);
    }
}
