fn main() {
    memory::run();
}
