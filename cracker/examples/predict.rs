//! Crack a seeded generator from its MSB stream and predict its next draws.
//!
//! Run with `cargo run --release --features std --example predict`.

use mt_cracker::{Cracker, Mt19937, STATE_BITS};

fn main() {
    tracing_subscriber::fmt::init();

    let mut victim = Mt19937::from_seed(5489);
    let outputs: Vec<u32> = (0..STATE_BITS).map(|_| victim.next_u32()).collect();
    println!("observed {} outputs (MSBs only are used)", outputs.len());

    let mut cracker = Cracker::new();
    cracker
        .recover_outputs(&outputs)
        .expect("observations come from a real MT19937");

    for i in 0..5 {
        let predicted = cracker.next_u32().expect("state was recovered");
        let actual = victim.next_u32();
        println!("draw {i}: predicted {predicted}, actual {actual}");
        assert_eq!(predicted, actual);
    }
    println!("predicted the victim's next draws exactly");
}
