pub fn zero_decimal_default_value() -> String {
    String::from("0")
}
