use crate::{build_matrix, BitMatrix, BitVec, CrackError, Cracker, Mt19937, STATE_BITS, STATE_WORDS};
use ark_std::{rand::Rng, vec::Vec};

fn msb_stream(mt: &mut Mt19937, n: usize) -> BitVec {
    BitVec::from_bits((0..n).map(|_| mt.next_u32() >> 31 != 0))
}

// A zero matrix is enough for the guard-path tests below: every rejection
// fires before any solving happens.
fn unarmed_cracker() -> Cracker {
    Cracker::from_matrix(BitMatrix::zero(STATE_BITS, STATE_BITS), 1).unwrap()
}

#[test]
fn missing_observation_bits_are_rejected() {
    let mut cracker = unarmed_cracker();
    let short = BitVec::zero(STATE_BITS - 1);
    assert_eq!(cracker.recover(&short), Err(CrackError::NotEnoughBits));
}

#[test]
fn prediction_requires_recovery() {
    let mut cracker = unarmed_cracker();
    assert_eq!(cracker.next_u32(), Err(CrackError::NotRecovered));
    assert_eq!(cracker.state().unwrap_err(), CrackError::NotRecovered);
}

#[test]
fn injected_matrices_must_be_square() {
    let skinny = BitMatrix::zero(STATE_BITS, 64);
    assert_eq!(
        Cracker::from_matrix(skinny, 1).unwrap_err(),
        CrackError::BadParameter
    );
}

#[test]
#[ignore = "builds the full 19968 x 19968 matrix"]
fn recovers_a_seeded_generator_from_its_msb_stream() {
    let mut victim = Mt19937::from_seed(5489);
    let outputs: Vec<u32> = (0..STATE_BITS).map(|_| victim.next_u32()).collect();
    assert_eq!(outputs[0], 3_499_211_612);

    let mut cracker = Cracker::new();
    cracker.recover_outputs(&outputs).unwrap();
    for i in 0..10_000 {
        assert_eq!(cracker.next_u32().unwrap(), victim.next_u32(), "draw {i}");
    }
}

#[test]
#[ignore = "builds the full 19968 x 19968 matrix"]
fn recovers_the_unit_state_exactly() {
    let mut state = [0u32; STATE_WORDS];
    state[0] = 1;
    let mut victim = Mt19937::from_state(state);
    let bits = msb_stream(&mut victim, STATE_BITS);

    let matrix = build_matrix(1).unwrap();
    // column 0 of the matrix is by definition this very stream
    for r in 0..STATE_BITS {
        assert_eq!(matrix.get(r, 0), bits.get(r), "row {r}");
    }

    let mut cracker = Cracker::from_matrix(matrix, 1).unwrap();
    cracker.recover(&bits).unwrap();
    let recovered = cracker.state().unwrap();
    assert_eq!(recovered[0], 1);
    assert!(recovered[1..].iter().all(|&w| w == 0));
}

#[test]
#[ignore = "builds the full 19968 x 19968 matrix"]
fn recovers_a_random_state_and_its_full_stream() {
    let mut rng = ark_std::test_rng();
    let mut state = [0u32; STATE_WORDS];
    for word in state.iter_mut() {
        *word = rng.gen();
    }
    let mut victim = Mt19937::from_state(state);
    let bits = msb_stream(&mut victim, STATE_BITS);

    let mut cracker = Cracker::new();
    cracker.recover(&bits).unwrap();
    assert_eq!(cracker.state().unwrap(), &state);
    for _ in 0..10_000 {
        assert_eq!(cracker.next_u32().unwrap(), victim.next_u32());
    }
}

#[test]
#[ignore = "builds the full 19968 x 19968 matrix"]
fn recovers_from_top_two_bit_observations() {
    let mut victim = Mt19937::from_seed(5489);
    let outputs: Vec<u32> = (0..STATE_BITS / 2).map(|_| victim.next_u32()).collect();

    let mut cracker = Cracker::with_observed_width(2).unwrap();
    cracker.recover_outputs(&outputs).unwrap();
    for _ in 0..1000 {
        assert_eq!(cracker.next_u32().unwrap(), victim.next_u32());
    }
}

#[test]
#[ignore = "builds the full 19968 x 19968 matrix"]
fn corrupted_observations_are_inconsistent() {
    let mut victim = Mt19937::from_seed(5489);
    let mut bits = msb_stream(&mut victim, STATE_BITS);
    let flipped = !bits.get(12_345);
    bits.set(12_345, flipped);

    let mut cracker = Cracker::new();
    assert_eq!(cracker.recover(&bits), Err(CrackError::Inconsistent));
    // a failed recovery must leave the predictor disarmed
    assert_eq!(cracker.next_u32(), Err(CrackError::NotRecovered));
}

#[test]
#[ignore = "builds the full 19968 x 19968 matrix twice"]
fn matrix_builds_are_identical() {
    let first = build_matrix(1).unwrap();
    let second = build_matrix(1).unwrap();
    assert!(first.as_words() == second.as_words());
}
