#[macro_export]
macro_rules! clap_enum_variants {
    ($e: ty) => {{
        use clap::builder::TypedValueParser;
        clap::builder::PossibleValuesParser::new(<$e as strum::VariantNames>::VARIANTS)
            .map(|s| s.parse::<$e>().unwrap())
    }};
}
