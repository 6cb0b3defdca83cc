fn main() {
    multiversx_sc_meta_lib::cli_main::<leverage_vault::AbiProvider>();
}
