error_chain! {
    errors {
        DimensionMismatch(s: String) {
            description("Dimension mismatch")
            display("Dimension mismatch: {}", s)
        }
        InvalidSize(s: String) {
            description("Invalid size")
            display("Invalid size: {}", s)
        }
        IndexOutOfRange(s: &'static str) {
            description("Index out of range")
            display("Index out of range: {}", s)
        }
    }
}
