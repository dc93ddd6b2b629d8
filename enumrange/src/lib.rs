use enumrange_codegen::Enumerable;
use enumrange_core::EnumRange;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Enumerable)]
#[repr(u8)]
pub enum Fruit {
    Apple,
    Orange,
    Pear,
    End,
}

/// Human-readable label of a fruit; the past-the-end sentinel has none.
pub fn name(fruit: Fruit) -> Option<&'static str> {
    match fruit {
        Fruit::Apple => Some("Apple"),
        Fruit::Orange => Some("Orange"),
        Fruit::Pear => Some("Pear"),
        Fruit::End => None,
    }
}

/// Walk the fruits forward with the native for loop, then backwards by
/// driving the reverse cursors directly.
pub fn run() -> String {
    const FRUITS: EnumRange<Fruit> = EnumRange::new();
    let mut out = String::new();

    for fruit in FRUITS {
        if let Some(label) = name(fruit) {
            out.push_str(label);
            out.push('\n');
        }
    }

    let mut it = FRUITS.rbegin();
    while it != FRUITS.rend() {
        if let Some(label) = name(it.value()) {
            out.push_str(label);
            out.push('\n');
        }
        it.advance();
    }

    out
}
