use minas::{ErrorKind, Generator, Width};

fn draws(bits: u32, seed: i128, n: usize) -> Vec<u128> {
    let mut g = Generator::new(bits, seed).expect("generator");
    (0..n).map(|_| g.advance()).collect()
}

#[test]
fn xorshift32_sequence_from_seed_one() {
    assert_eq!(draws(32, 1, 3), vec![270_369, 67_634_689, 2_647_435_461]);
}

#[test]
fn xorshift64_sequence_from_seed_one() {
    assert_eq!(
        draws(64, 1, 3),
        vec![1_082_269_761, 1_152_992_998_833_853_505, 11_177_516_664_432_764_457]
    );
}

#[test]
fn range_draw_after_three_advances_is_pinned() {
    let mut g = Generator::new(32, 1).expect("generator");
    for _ in 0..3 { g.advance(); }
    assert_eq!(g.next_in_range(25).unwrap(), 21);
    assert_eq!(g.state(), 307_599_695);
}

#[test]
fn same_seed_replays_same_draws() {
    assert_eq!(draws(64, 0xDEAD_BEEF, 32), draws(64, 0xDEAD_BEEF, 32));
    assert_ne!(draws(64, 0xDEAD_BEEF, 8), draws(64, 0xDEAD_BEF0, 8));
}

#[test]
fn letters_follow_range_draws() {
    let mut g = Generator::new(32, 1).expect("generator");
    let letters: Vec<char> = (0..3).map(|_| g.next_letter('Z').unwrap()).collect();
    assert_eq!(letters, vec!['V', 'F', 'V']);
    let mut single = Generator::new(32, 7).expect("generator");
    assert_eq!(single.next_letter('A').unwrap(), 'A');
}

#[test]
fn top_seed_keeps_its_high_bit() {
    let mut g = Generator::new(32, 1i128 << 32).expect("generator");
    assert_eq!(g.advance(), 4_296_048_640);
    assert!(Generator::new(64, 1i128 << 64).is_ok());
}

#[test]
fn invalid_construction_is_rejected() {
    for (bits, seed) in [(16, 1), (32, 0), (32, -5), (32, (1i128 << 32) + 1), (64, (1i128 << 64) + 1)] {
        let err = Generator::new(bits, seed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "bits={} seed={}", bits, seed);
    }
    assert!(Width::try_from(48).is_err());
}

#[test]
fn invalid_bounds_leave_state_untouched() {
    let mut g = Generator::new(32, 99).expect("generator");
    assert!(g.next_in_range(0).is_err());
    assert!(g.next_letter('a').is_err());
    assert!(g.next_letter('[').is_err());
    assert_eq!(g.state(), 99);
}

#[test]
fn copies_are_independent_and_compare_by_value() {
    let mut a = Generator::new(64, 12345).expect("generator");
    let mut b = a.clone();
    assert_eq!(a, b);
    a.advance();
    assert_ne!(a, b);
    b.advance();
    assert_eq!(a, b);
    assert_ne!(Generator::new(32, 5).unwrap(), Generator::new(64, 5).unwrap());
}

#[test]
fn display_names_width_and_state() {
    let g = Generator::new(32, 1).expect("generator");
    assert_eq!(g.width(), Width::W32);
    assert_eq!(Generator::new(64, 1).unwrap().width().bits(), 64);
    assert_eq!(g.to_string(), "xorshift32(s=1)");
}
