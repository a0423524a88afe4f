// Demonstration harness: builds a few layers from one shared generator and
// prints their parameters, a prediction and the three gradients.
//
//   cargo run -- [seed]
//   RUST_LOG=debug cargo run
use log::info;
use sigmoid_layer::{Layer, NnError, RandomGenerator, Result};

fn main() -> Result<()> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => Some(arg.parse::<u64>().map_err(|e| {
            NnError::InvalidArgument(format!("seed must be an unsigned integer: {e}"))
        })?),
        None => None,
    };
    let mut generator = RandomGenerator::new(seed);
    info!("using seed {}", generator.seed());

    print_parameters(&mut generator)?;
    print_back_propagation(&mut generator)?;
    Ok(())
}

fn print_parameters(generator: &mut RandomGenerator) -> Result<()> {
    let first = Layer::new(30, 20, generator)?;
    println!("Weights of a 30x20 layer:\n{}", first.weights());

    let second = Layer::new(25, 35, generator)?;
    println!("Biases of a 25x35 layer:\n{:?}\n", second.biases());
    Ok(())
}

fn print_back_propagation(generator: &mut RandomGenerator) -> Result<()> {
    let layer = Layer::new(3, 2, generator)?;
    let x = [-2.0, 3.0];
    let u = [-1.0, 2.0, 1.0];

    println!("predict(x) = {:?}\n", layer.predict(&x)?);
    println!("grad_a(x, u) =\n{}", layer.grad_a(&x, &u)?);
    println!("grad_b(x, u) = {:?}\n", layer.grad_b(&x, &u)?);
    println!("grad_x(x, u) = {:?}", layer.grad_x(&x, &u)?);
    Ok(())
}
