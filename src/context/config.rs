pub trait ConfigContext {
    fn continue_on_fail(&self) -> bool;
    fn endpoint(&self) -> &str;
}
