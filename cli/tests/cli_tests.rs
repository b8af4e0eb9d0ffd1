#[test]
fn concordance() {
    trycmd::TestCases::new()
        .case("tests/concordance/*.toml")
        .default_bin_name("gtconcord");
}

#[test]
fn convert() {
    trycmd::TestCases::new()
        .case("tests/convert/*.toml")
        .default_bin_name("gtconcord");
}
