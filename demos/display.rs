use easy_pin::{Generator, GeneratorConfig};

fn main() {
    let generator = Generator::new(GeneratorConfig::default().with_separator("-")).unwrap();
    let id = 1337331;
    let encoded = generator.generate(id).unwrap();
    let code = generator.display(id).unwrap();
    let other = format!("{}", code);
    println!("{} / {}", encoded, other);
}
