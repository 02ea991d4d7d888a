use algotour::topk::{TopK, bottom_k, top_k, top_k_by, top_k_by_key};
use algotour::utils::{SplitMix64, shuffle};

fn sorted_desc(mut v: Vec<i32>) -> Vec<i32> {
    v.sort_unstable_by(|a, b| b.cmp(a));
    v
}

#[test]
fn selects_greatest_and_least() {
    let items = vec![5, 1, 9, 3, 7, 2];
    assert_eq!(top_k(items.clone(), 3), vec![9, 7, 5]);
    assert_eq!(bottom_k(items, 3), vec![1, 2, 3]);
}

#[test]
fn agrees_with_full_sort_truncation() {
    let mut rng = SplitMix64::new(7);
    for n in 0..40i32 {
        let items: Vec<i32> = (0..n).map(|_| (rng.next_u64() % 50) as i32).collect();
        for k in 0..(n as usize + 3) {
            let mut expect = sorted_desc(items.clone());
            expect.truncate(k);
            assert_eq!(top_k(items.clone(), k), expect, "n={n} k={k}");
        }
    }
}

#[test]
fn k_zero_is_empty() {
    assert_eq!(top_k(vec![3, 1, 2], 0), Vec::<i32>::new());
    assert_eq!(bottom_k(vec![3, 1, 2], 0), Vec::<i32>::new());
}

#[test]
fn k_beyond_len_returns_everything_sorted() {
    assert_eq!(top_k(vec![4, 2, 8], 10), vec![8, 4, 2]);
    assert_eq!(bottom_k(vec![4, 2, 8], 10), vec![2, 4, 8]);
}

#[test]
fn empty_input_is_empty_for_any_k() {
    for k in [0, 1, 5] {
        assert_eq!(top_k(Vec::<i32>::new(), k), Vec::<i32>::new());
    }
}

#[test]
fn result_is_sorted_and_reselection_is_identity() {
    let items = vec![12, 4, 9, 4, 30, 1, 17];
    let picked = top_k(items, 4);
    assert!(picked.is_sorted_by(|a, b| a >= b));
    assert_eq!(top_k(picked.clone(), 4), picked);
}

#[test]
fn buffer_never_exceeds_k() {
    let mut rng = SplitMix64::new(99);
    let mut items: Vec<i32> = (0..200).collect();
    shuffle(&mut items, &mut rng);

    let mut sel = TopK::new(7);
    let mut seen: Vec<i32> = Vec::new();
    for x in items {
        sel.push(x);
        seen.push(x);
        assert!(sel.len() <= 7);
        // After any prefix the buffer holds the k best seen so far, and
        // the root is the worst of them.
        let mut best = sorted_desc(seen.clone());
        best.truncate(7);
        assert_eq!(sel.len(), best.len());
        assert_eq!(sel.worst().copied(), best.last().copied());
    }
    assert_eq!(sel.into_sorted_vec(), vec![199, 198, 197, 196, 195, 194, 193]);
}

#[test]
fn selection_is_input_order_independent() {
    let mut rng = SplitMix64::new(0xD15C);
    let mut items: Vec<i32> = (0..64).collect();
    let baseline = top_k(items.clone(), 10);
    for _ in 0..8 {
        shuffle(&mut items, &mut rng);
        assert_eq!(top_k(items.clone(), 10), baseline);
    }
}

#[test]
fn comparator_and_key_forms_agree() {
    let items = vec![5, 1, 9, 3, 7, 2];
    assert_eq!(top_k_by(items.clone(), 3, |a, b| a.cmp(b)), top_k(items.clone(), 3));
    assert_eq!(top_k_by(items.clone(), 3, |a, b| b.cmp(a)), bottom_k(items.clone(), 3));
    assert_eq!(top_k_by_key(items.clone(), 3, |&x| x), top_k(items, 3));
}

#[test]
fn key_extraction_selects_by_key() {
    let players = vec![("ada", 310), ("brin", 88), ("cleo", 154), ("dov", 271)];
    let top = top_k_by_key(players, 2, |p| p.1);
    assert_eq!(top, vec![("ada", 310), ("dov", 271)]);
}

#[test]
fn duplicates_keep_multiset_counts() {
    let items = vec![5, 5, 5, 2, 2, 9];
    assert_eq!(top_k(items, 4), vec![9, 5, 5, 5]);
}

#[test]
fn extend_feeds_the_accumulator() {
    let mut sel = TopK::new(3);
    sel.extend(vec![4, 8, 1]);
    sel.extend(vec![9, 0]);
    assert_eq!(sel.len(), 3);
    assert_eq!(sel.into_sorted_vec(), vec![9, 8, 4]);
}

#[test]
fn zero_capacity_accumulator_stays_empty() {
    let mut sel = TopK::new(0);
    sel.extend(vec![1, 2, 3]);
    assert!(sel.is_empty());
    assert_eq!(sel.worst(), None);
    assert_eq!(sel.into_sorted_vec(), Vec::<i32>::new());
}

#[test]
fn custom_comparator_orders_best_first() {
    // Longest words win; best-first means longest-first.
    let words = vec!["fig", "apricot", "plum", "currant", "kiwi"];
    let longest = top_k_by(words, 2, |a, b| a.len().cmp(&b.len()));
    assert_eq!(longest.len(), 2);
    assert!(longest[0].len() >= longest[1].len());
    assert!(longest.contains(&"apricot"));
    assert!(longest.contains(&"currant"));
}
