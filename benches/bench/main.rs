// third-party imports
use criterion::criterion_main;

const ND: &str = ":"; // name delimiter

mod tee;

criterion_main!(tee::benches);
