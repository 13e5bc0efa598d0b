fn main() {
    survival_shooter::game::run();
}
