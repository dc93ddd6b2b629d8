pub fn main() {
    print!("{}", enumrange::run());
}
