fn main() -> std::process::ExitCode {
    gematria_lib::run()
}
