fn main() {
    multiversx_sc_meta_lib::cli_main::<pay_splitter::AbiProvider>();
}
