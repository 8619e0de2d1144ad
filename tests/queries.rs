//! Integration tests for the suffix tree index.
//!
//! Every query is cross-checked two ways: the naive O(n²) builder serves
//! as a structural oracle for the linear-time builder, and direct
//! character scans over the raw text serve as an answer oracle for both.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sti::error::QueryError;
use sti::index::{Strategy, SuffixTree};

const STRATEGIES: [Strategy; 2] = [Strategy::Naive, Strategy::Ukkonen];

/// Direct-scan oracle: every start index where `pattern` occurs in `raw`.
fn scan_occurrences(raw: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = raw.chars().collect();
    let pat: Vec<char> = pattern.chars().collect();
    if pat.is_empty() || pat.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pat.len())
        .filter(|&i| text[i..i + pat.len()] == pat[..])
        .collect()
}

/// Direct-scan oracle: literal common prefix length of `raw[i..]` and `raw[j..]`.
fn scan_lcp(raw: &str, i: usize, j: usize) -> usize {
    let text: Vec<char> = raw.chars().collect();
    let mut length = 0;
    while i + length < text.len()
        && j + length < text.len()
        && text[i + length] == text[j + length]
    {
        length += 1;
    }
    length
}

/// Every substring of `raw`, deduplicated.
fn all_substrings(raw: &str) -> Vec<String> {
    let text: Vec<char> = raw.chars().collect();
    let mut seen = std::collections::HashSet::new();
    for start in 0..text.len() {
        for end in start + 1..=text.len() {
            seen.insert(text[start..end].iter().collect::<String>());
        }
    }
    seen.into_iter().collect()
}

/// Literal common prefix length of all the suffixes starting at `positions`.
fn shared_len(raw: &str, positions: &[usize]) -> usize {
    positions[1..]
        .iter()
        .map(|&p| scan_lcp(raw, positions[0], p))
        .min()
        .unwrap_or_else(|| raw.chars().count() - positions[0])
}

fn random_text(rng: &mut StdRng, len: usize, alphabet: &[char]) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[test]
fn occurrences_match_direct_scan() {
    let raw = "senselessness";
    for strategy in STRATEGIES {
        let tree = SuffixTree::build(raw, strategy);
        for pattern in all_substrings(raw) {
            let mut hits = tree.occurrences(&pattern).unwrap();
            hits.sort_unstable();
            assert_eq!(hits, scan_occurrences(raw, &pattern), "pattern {pattern:?}");
        }
    }
}

#[test]
fn count_equals_occurrences_len() {
    let raw = "cagtcatgcatacgtctatatcggctgc";
    for strategy in STRATEGIES {
        let tree = SuffixTree::build(raw, strategy);
        for pattern in all_substrings(raw) {
            assert_eq!(
                tree.occurrences_count(&pattern).unwrap(),
                tree.occurrences(&pattern).unwrap().len(),
                "pattern {pattern:?}"
            );
        }
    }
}

#[test]
fn every_reported_occurrence_matches_literally() {
    let raw = "abcabxabcd";
    let chars: Vec<char> = raw.chars().collect();
    for strategy in STRATEGIES {
        let tree = SuffixTree::build(raw, strategy);
        for pattern in all_substrings(raw) {
            let pat: Vec<char> = pattern.chars().collect();
            for hit in tree.occurrences(&pattern).unwrap() {
                assert_eq!(&chars[hit..hit + pat.len()], &pat[..]);
            }
        }
    }
}

#[test]
fn lcp_matches_direct_scan_and_is_symmetric() {
    let raw = "mississippi";
    for strategy in STRATEGIES {
        let tree = SuffixTree::build(raw, strategy);
        for i in 0..raw.len() {
            for j in 0..raw.len() {
                let expected = scan_lcp(raw, i, j);
                assert_eq!(tree.longest_common_prefix(i, j).unwrap(), expected, "({i}, {j})");
                assert_eq!(
                    tree.longest_common_prefix(i, j).unwrap(),
                    tree.longest_common_prefix(j, i).unwrap()
                );
            }
        }
    }
}

#[test]
fn lcp_of_suffix_with_itself_is_its_length() {
    let raw = "senselessness";
    for strategy in STRATEGIES {
        let tree = SuffixTree::build(raw, strategy);
        for i in 0..raw.len() {
            assert_eq!(tree.longest_common_prefix(i, i).unwrap(), raw.len() - i);
        }
    }
}

#[test]
fn strategies_agree_on_random_texts() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let alphabet: Vec<char> = "abc".chars().collect();
    for round in 0..20 {
        let len = rng.gen_range(1..=60);
        let raw = random_text(&mut rng, len, &alphabet);
        let naive = SuffixTree::build(&raw, Strategy::Naive);
        let ukkonen = SuffixTree::build(&raw, Strategy::Ukkonen);

        assert_eq!(naive.node_count(), ukkonen.node_count(), "round {round}: {raw:?}");

        for pattern in all_substrings(&raw) {
            let mut a = naive.occurrences(&pattern).unwrap();
            let mut b = ukkonen.occurrences(&pattern).unwrap();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "round {round}: {raw:?} / {pattern:?}");
            assert_eq!(
                naive.occurrences_count(&pattern).unwrap(),
                ukkonen.occurrences_count(&pattern).unwrap()
            );
        }
        for i in 0..raw.chars().count() {
            for j in 0..raw.chars().count() {
                assert_eq!(
                    naive.longest_common_prefix(i, j).unwrap(),
                    ukkonen.longest_common_prefix(i, j).unwrap(),
                    "round {round}: {raw:?} ({i}, {j})"
                );
            }
        }
        for repetitions in 2..5 {
            let a = naive.longest_repeated_substring(repetitions).unwrap();
            let b = ukkonen.longest_repeated_substring(repetitions).unwrap();
            // the tie-break is traversal-order dependent, so the chosen
            // node may differ, but the substring length and the
            // qualifying count must agree
            assert_eq!(a.is_empty(), b.is_empty(), "round {round}: {raw:?}");
            if !a.is_empty() {
                assert_eq!(
                    shared_len(&raw, &a),
                    shared_len(&raw, &b),
                    "round {round}: {raw:?}"
                );
                assert!(shared_len(&raw, &a) >= 1);
                assert!(a.len() >= repetitions && b.len() >= repetitions);
            }
        }
    }
}

#[test]
fn senselessness_scenario() {
    let raw = "senselessness";
    for strategy in STRATEGIES {
        let tree = SuffixTree::build(raw, strategy);

        let mut s_hits = tree.occurrences("s").unwrap();
        s_hits.sort_unstable();
        assert_eq!(s_hits, scan_occurrences(raw, "s"));

        let mut ss_hits = tree.occurrences("ss").unwrap();
        ss_hits.sort_unstable();
        assert_eq!(ss_hits, scan_occurrences(raw, "ss"));

        let e_count = raw.chars().filter(|&c| c == 'e').count();
        assert_eq!(tree.occurrences_count("e").unwrap(), e_count);

        // some substring of positive length repeats; its occurrences all
        // literally share a prefix of that length
        let repeated = tree.longest_repeated_substring(2).unwrap();
        assert!(!repeated.is_empty());
        let shared = scan_lcp(raw, repeated[0], repeated[1]);
        assert!(shared >= 1);

        // an impossible repetition count yields an empty answer
        let impossible = tree.longest_repeated_substring(raw.len() + 1).unwrap();
        assert!(impossible.is_empty());
    }
}

#[test]
fn repeated_substring_is_maximal() {
    // "ana" is the longest substring of "banana" occurring twice
    for strategy in STRATEGIES {
        let tree = SuffixTree::build("banana", strategy);
        let mut hits = tree.longest_repeated_substring(2).unwrap();
        hits.sort_unstable();
        assert_eq!(hits, vec![1, 3]);
        assert_eq!(scan_lcp("banana", 1, 3), 3);
    }
}

#[test]
fn invalid_arguments_are_rejected_at_the_boundary() {
    for strategy in STRATEGIES {
        let tree = SuffixTree::build("abc", strategy);
        assert_eq!(tree.search(""), Err(QueryError::EmptyPattern));
        assert_eq!(
            tree.longest_repeated_substring(0),
            Err(QueryError::RepetitionsTooSmall(0))
        );
        assert_eq!(
            tree.longest_repeated_substring(1),
            Err(QueryError::RepetitionsTooSmall(1))
        );
        assert_eq!(
            tree.longest_common_prefix(3, 0),
            Err(QueryError::SuffixOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            tree.longest_common_prefix(0, 99),
            Err(QueryError::SuffixOutOfRange { index: 99, len: 3 })
        );
    }
}

#[test]
fn oversized_and_alien_patterns_are_no_match_not_errors() {
    for strategy in STRATEGIES {
        let tree = SuffixTree::build("abc", strategy);
        assert!(tree.search("abcd").unwrap().is_none());
        assert!(tree.search("zzz").unwrap().is_none());
        assert_eq!(tree.occurrences("abcabc").unwrap(), Vec::<usize>::new());
        assert_eq!(tree.occurrences_count("q").unwrap(), 0);
    }
}

#[test]
fn degenerate_texts_answer_consistently() {
    for strategy in STRATEGIES {
        let empty = SuffixTree::build("", strategy);
        assert_eq!(empty.text_len(), 0);
        assert_eq!(empty.occurrences_count("a").unwrap(), 0);
        assert!(empty.longest_repeated_substring(2).unwrap().is_empty());
        assert!(empty.longest_common_prefix(0, 0).is_err());

        let single = SuffixTree::build("x", strategy);
        assert_eq!(single.occurrences("x").unwrap(), vec![0]);
        assert_eq!(single.occurrences_count("x").unwrap(), 1);
        assert!(single.longest_repeated_substring(2).unwrap().is_empty());
        assert_eq!(single.longest_common_prefix(0, 0).unwrap(), 1);
    }
}
