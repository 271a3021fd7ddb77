use easy_pin::*;

fn main() {
    let generator = Generator::default();

    for n in 1..11 {
        let encoded = generator.generate(n).unwrap();
        let decoded = generator.revert(&encoded).unwrap();
        println!("{} -> {} -> {}", n, encoded, decoded);
    }
}
