use envbind::Bind;

#[derive(Bind, Default)]
pub struct Pair<A, B> {
    pub left: A,
    pub right: B,
}

#[derive(Bind)]
pub struct Limits<const N: usize> {
    pub values: [i32; N],
    label: String,
}

fn main() {
    let mut pair = Pair::<i8, String>::default();
    let _ = envbind::load_from_environment(&mut pair, "PAIR");

    let mut limits = Limits::<4> {
        values: [0; 4],
        label: String::new(),
    };
    let _ = envbind::load_from_environment(&mut limits, "LIMITS");
    let _ = limits.label;
}
