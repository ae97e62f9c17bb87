use relu_stack::{train_until_streak, BoolGate, BoolSampler, Network, TrainConfig};

fn main() -> relu_stack::Result<()> {
    let mut network = Network::new(&[2, 2, 1])?;
    let mut sampler = BoolSampler::new(BoolGate::And, 42);

    let report = train_until_streak(&mut network, &mut sampler, &TrainConfig::seeded(42))?;
    println!("Stopped after {} presentations", report.presentations);

    for sample in BoolGate::And.truth_table() {
        network.compute(&sample.inputs)?;
        println!(
            "Input: {:?} -> Output: {:.4} (expected {})",
            sample.inputs,
            network.output()[0],
            sample.label
        );
    }

    Ok(())
}
