use easy_pin::*;

fn main() {
    let generator_a = Generator::new(GeneratorConfig::default().with_seed(1)).unwrap();
    let generator_b = Generator::new(GeneratorConfig::default().with_seed(2)).unwrap();

    for n in 10..21 {
        println!(
            "{}  {}",
            generator_a.generate(n).unwrap(),
            generator_b.generate(n).unwrap()
        );
    }
}
