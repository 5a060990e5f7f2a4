fn main() {
    // Propagates ESP-IDF linker/env settings for on-target builds.
    // On host builds (no ESP environment set up) this emits nothing.
    embuild::espidf::sysenv::output();
}
