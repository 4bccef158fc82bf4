use lazy_static::lazy_static;
use regex::bytes::Regex;

/// Finds the first line made only of `---`, trailing blanks allowed.
/// Returns where the header ends and where the body starts.
pub fn find_separator(raw: &[u8]) -> Option<(usize, usize)> {
    lazy_static! {
            static ref SEPARATOR_REGEX : Regex = Regex::new(r"(?m)^---[ \t\r]*(?:\n|\z)").unwrap();
        }

    SEPARATOR_REGEX.find(raw).map(|m| (m.start(), m.end()))
}

/// Splits the header block into title and title picture.
/// The picture is an optional trailing `[...]` group, e.g. `My post [cover.png]`
pub fn split_title_pic(header: &[u8]) -> (&[u8], &[u8]) {
    let header = header.trim_ascii();

    if let Some(inner) = header.strip_suffix(b"]") {
        if let Some(open) = inner.iter().rposition(|&b| b == b'[') {
            let title = &inner[..open];
            let title_pic = &inner[(open + 1)..];
            return (title.trim_ascii(), title_pic.trim_ascii());
        }
    }

    (header, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_separator() {
        let raw = b"Title\n---\nbody";
        assert_eq!(find_separator(raw), Some((6, 10)));

        let raw = b"Title\r\n---\r\nbody";
        assert_eq!(find_separator(raw), Some((7, 12)));

        let raw = b"Title\n---";
        assert_eq!(find_separator(raw), Some((6, 9)));

        let raw = b"Title\n---   \nbody";
        assert_eq!(find_separator(raw), Some((6, 13)));
    }

    #[test]
    fn test_find_separator_missing() {
        assert_eq!(find_separator(b""), None);
        assert_eq!(find_separator(b"Title\nbody"), None);
        assert_eq!(find_separator(b"Title\n----\nbody"), None);
        assert_eq!(find_separator(b"Title\n --- \nbody"), None);
        assert_eq!(find_separator(b"Title --- body"), None);
    }

    #[test]
    fn test_find_separator_first_wins() {
        let raw = b"Title\n---\nbody\n---\nmore";
        assert_eq!(find_separator(raw), Some((6, 10)));
    }

    #[test]
    fn test_split_title_pic() {
        let (title, pic) = split_title_pic(b"  My post [img/cover.png]\n");
        assert_eq!(title, b"My post");
        assert_eq!(pic, b"img/cover.png");

        let (title, pic) = split_title_pic(b"My post\n[ http://x.org/a.jpg ]");
        assert_eq!(title, b"My post");
        assert_eq!(pic, b"http://x.org/a.jpg");
    }

    #[test]
    fn test_split_title_without_pic() {
        let (title, pic) = split_title_pic(b"Using [brackets] in a title\n");
        assert_eq!(title, b"Using [brackets] in a title");
        assert!(pic.is_empty());

        let (title, pic) = split_title_pic(b"Unbalanced]");
        assert_eq!(title, b"Unbalanced]");
        assert!(pic.is_empty());
    }

    #[test]
    fn test_split_only_pic() {
        let (title, pic) = split_title_pic(b"[cover.png]");
        assert!(title.is_empty());
        assert_eq!(pic, b"cover.png");
    }
}
