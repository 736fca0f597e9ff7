fn main() {
    opkg::run_cli();
}
