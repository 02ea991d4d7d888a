use algotour::fmt::{braced, braced_with};
use algotour::utils::{SplitMix64, scrambled, shuffle};

#[test]
fn same_seed_same_stream() {
    let mut a = SplitMix64::new(42);
    let mut b = SplitMix64::new(42);
    for _ in 0..32 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = SplitMix64::new(1);
    let mut b = SplitMix64::new(2);
    let same = (0..16).filter(|_| a.next_u64() == b.next_u64()).count();
    assert_eq!(same, 0);
}

#[test]
fn below_stays_in_range() {
    let mut rng = SplitMix64::new(7);
    for _ in 0..1000 {
        assert!(rng.below(13) < 13);
    }
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = SplitMix64::new(0xF00D);
    let original: Vec<i32> = (0..50).collect();
    let mut shuffled = original.clone();
    shuffle(&mut shuffled, &mut rng);
    assert_ne!(shuffled, original);
    let mut back = shuffled;
    back.sort_unstable();
    assert_eq!(back, original);
}

#[test]
fn scrambled_covers_the_range() {
    let mut rng = SplitMix64::new(3);
    let mut v = scrambled(5..12, &mut rng);
    v.sort_unstable();
    assert_eq!(v, (5..12).collect::<Vec<i32>>());
}

#[test]
fn braced_renders_sequences() {
    assert_eq!(braced([1, 2, 3]), "{1,2,3}");
    assert_eq!(braced(Vec::<i32>::new()), "{}");
    assert_eq!(braced(std::iter::once(9)), "{9}");
}

#[test]
fn braced_with_applies_the_renderer() {
    let pairs = vec![("a", 1), ("b", 2)];
    assert_eq!(
        braced_with(&pairs, |(k, v)| format!("{k}={v}")),
        "{a=1,b=2}"
    );
}
