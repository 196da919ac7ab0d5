fn main() {
    tictactoe::run();
}
