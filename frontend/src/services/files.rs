//! Conversion of browser file handles into upload candidates.

use pdfdrop::FileCandidate;
use web_sys::{File, FileList};

/// Every file of a `FileList`, in order. `None` yields nothing.
pub fn candidates_from_list(list: Option<FileList>) -> Vec<FileCandidate<File>> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(candidate_from_file)
        .collect()
}

/// Wrap a `File`, keeping the handle itself for the entry.
pub fn candidate_from_file(file: File) -> FileCandidate<File> {
    FileCandidate {
        name: file.name(),
        media_type: file.type_(),
        size: size_from_js(file.size()),
        handle: file,
    }
}

/// JS exposes sizes as doubles; anything odd counts as empty.
pub fn size_from_js(size: f64) -> u64 {
    if size.is_finite() && size > 0.0 {
        size as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_js() {
        assert_eq!(size_from_js(2048.0), 2048);
        assert_eq!(size_from_js(0.0), 0);
        assert_eq!(size_from_js(-1.0), 0);
        assert_eq!(size_from_js(f64::NAN), 0);
        assert_eq!(size_from_js(f64::INFINITY), 0);
    }
}
