fn main() {
    pacwise::run_cli();
}
