// rs/src/bin/duext/extrema.rs
use serde::Serialize;

use crate::record::FileRecord;

/// The four extremum slots.
///
/// Built from the first eligible file with [`Extrema::seed`], then updated
/// with [`Extrema::observe`] for every later file. Ties go to the last file
/// for `largest`/`most_recent` and stay with the first for `smallest`/`oldest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extrema {
    pub largest: FileRecord,
    pub smallest: FileRecord,
    pub most_recent: FileRecord,
    pub oldest: FileRecord,
}

impl Extrema {
    pub fn seed(first: FileRecord) -> Self {
        Extrema {
            largest: first.clone(),
            smallest: first.clone(),
            most_recent: first.clone(),
            oldest: first,
        }
    }

    pub fn observe(&mut self, rec: FileRecord) {
        if rec.size >= self.largest.size {
            self.largest = rec.clone();
        } else if rec.size < self.smallest.size {
            self.smallest = rec.clone();
        }

        if rec.modified >= self.most_recent.modified {
            self.most_recent = rec;
        } else if rec.modified < self.oldest.modified {
            self.oldest = rec;
        }
    }
}

/// Seed on the first file, compare on every later one.
pub fn update(slot: &mut Option<Extrema>, rec: FileRecord) {
    match slot {
        Some(ext) => ext.observe(rec),
        None => *slot = Some(Extrema::seed(rec)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn reduce(records: Vec<FileRecord>) -> Option<Extrema> {
        let mut slot = None;
        for r in records {
            update(&mut slot, r);
        }
        slot
    }

    fn rec(name: &str, size: u64, modified: i64) -> FileRecord {
        FileRecord {
            permissions: "-rw-r--r--".to_string(),
            links: 1,
            owner: "u".to_string(),
            group: "g".to_string(),
            size,
            modified,
            name: name.to_string(),
            path: PathBuf::from("/d").join(name),
        }
    }

    #[test]
    fn empty_input_has_no_extrema() {
        assert!(reduce(Vec::new()).is_none());
    }

    #[test]
    fn single_file_seeds_all_four() {
        let ext = reduce(vec![rec("only", 10, 100)]).unwrap();
        assert_eq!(ext.largest.name, "only");
        assert_eq!(ext.smallest.name, "only");
        assert_eq!(ext.most_recent.name, "only");
        assert_eq!(ext.oldest.name, "only");
    }

    #[test]
    fn two_files_older_smaller_first() {
        let ext = reduce(vec![rec("a.txt", 100, 1000), rec("b.txt", 500, 2000)]).unwrap();
        assert_eq!(ext.largest.name, "b.txt");
        assert_eq!(ext.smallest.name, "a.txt");
        assert_eq!(ext.most_recent.name, "b.txt");
        assert_eq!(ext.oldest.name, "a.txt");
    }

    #[test]
    fn two_files_newer_larger_first() {
        let ext = reduce(vec![rec("b.txt", 500, 2000), rec("a.txt", 100, 1000)]).unwrap();
        assert_eq!(ext.largest.name, "b.txt");
        assert_eq!(ext.smallest.name, "a.txt");
        assert_eq!(ext.most_recent.name, "b.txt");
        assert_eq!(ext.oldest.name, "a.txt");
    }

    #[test]
    fn largest_tie_goes_to_last() {
        let ext = reduce(vec![rec("x", 5, 1), rec("big1", 50, 1), rec("big2", 50, 1)]).unwrap();
        assert_eq!(ext.largest.name, "big2");
    }

    #[test]
    fn smallest_tie_stays_with_first() {
        let ext = reduce(vec![rec("big", 50, 1), rec("s1", 5, 1), rec("s2", 5, 1)]).unwrap();
        assert_eq!(ext.smallest.name, "s1");
    }

    #[test]
    fn most_recent_tie_goes_to_last() {
        let ext = reduce(vec![rec("old", 1, 10), rec("n1", 1, 99), rec("n2", 1, 99)]).unwrap();
        assert_eq!(ext.most_recent.name, "n2");
    }

    #[test]
    fn oldest_tie_stays_with_first() {
        let ext = reduce(vec![rec("new", 1, 99), rec("o1", 1, 10), rec("o2", 1, 10)]).unwrap();
        assert_eq!(ext.oldest.name, "o1");
    }

    #[test]
    fn all_equal_sizes_split_between_first_and_last() {
        let ext = reduce(vec![rec("p", 7, 3), rec("q", 7, 3), rec("r", 7, 3)]).unwrap();
        assert_eq!(ext.largest.name, "r");
        assert_eq!(ext.smallest.name, "p");
        assert_eq!(ext.most_recent.name, "r");
        assert_eq!(ext.oldest.name, "p");
    }

    #[test]
    fn zero_byte_first_file_seeds_once() {
        let ext = reduce(vec![rec("empty", 0, 500), rec("mid", 30, 200), rec("top", 90, 900)])
            .unwrap();
        assert_eq!(ext.largest.name, "top");
        assert_eq!(ext.smallest.name, "empty");
        assert_eq!(ext.most_recent.name, "top");
        assert_eq!(ext.oldest.name, "mid");
    }

    #[test]
    fn new_largest_is_not_checked_against_smallest() {
        let mut ext = Extrema::seed(rec("seed", 10, 10));
        ext.observe(rec("grow", 20, 5));
        assert_eq!(ext.largest.name, "grow");
        assert_eq!(ext.smallest.name, "seed");
        assert_eq!(ext.oldest.name, "grow");
        assert_eq!(ext.most_recent.name, "seed");
    }

    #[test]
    fn extrema_match_min_and_max() {
        let sizes: [u64; 8] = [40, 3, 77, 3, 12, 77, 0, 19];
        let times: [i64; 8] = [5, 80, 80, -2, 14, 33, 61, -2];
        let records: Vec<_> = sizes
            .iter()
            .zip(times.iter())
            .enumerate()
            .map(|(i, (&s, &t))| rec(&format!("f{i}"), s, t))
            .collect();

        let ext = reduce(records).unwrap();
        assert_eq!(ext.largest.size, 77);
        assert_eq!(ext.largest.name, "f5");
        assert_eq!(ext.smallest.size, 0);
        assert_eq!(ext.most_recent.modified, 80);
        assert_eq!(ext.most_recent.name, "f2");
        assert_eq!(ext.oldest.modified, -2);
        assert_eq!(ext.oldest.name, "f3");
    }
}
