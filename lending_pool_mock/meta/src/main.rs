fn main() {
    multiversx_sc_meta_lib::cli_main::<lending_pool_mock::AbiProvider>();
}
