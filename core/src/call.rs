/// A callable that takes its arguments as a tuple and returns a future.
///
/// Implemented for every `Fn(T1, .., Tn) -> Fut` up to eight arguments, so plain async
/// functions and closures returning async blocks both qualify. The zero-argument form
/// takes `()`, the one-argument form `(T1,)`.
pub trait AsyncCall<Args> {
    type Output;
    type Future: Future<Output = Self::Output>;

    fn invoke(&self, args: Args) -> Self::Future;
}

macro_rules! impl_async_call {
    ($($arg:ident),*) => {
        impl<Func, Fut, $($arg,)*> AsyncCall<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Fut,
            Fut: Future,
        {
            type Output = Fut::Output;
            type Future = Fut;

            #[allow(non_snake_case)]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> Self::Future {
                (self)($($arg),*)
            }
        }
    };
}

impl_async_call!();
impl_async_call!(T1);
impl_async_call!(T1, T2);
impl_async_call!(T1, T2, T3);
impl_async_call!(T1, T2, T3, T4);
impl_async_call!(T1, T2, T3, T4, T5);
impl_async_call!(T1, T2, T3, T4, T5, T6);
impl_async_call!(T1, T2, T3, T4, T5, T6, T7);
impl_async_call!(T1, T2, T3, T4, T5, T6, T7, T8);

#[cfg(test)]
mod tests {
    use super::AsyncCall;
    use futures_util::FutureExt;

    async fn nothing() -> &'static str {
        "nothing"
    }

    async fn join(a: &'static str, b: String, c: char) -> String {
        format!("{a}{b}{c}")
    }

    #[test]
    fn forwards_zero_arguments() {
        assert_eq!(nothing.invoke(()).now_or_never(), Some("nothing"));
    }

    #[test]
    fn forwards_arguments_in_order() {
        let joined = join.invoke(("a", "b".to_string(), 'c')).now_or_never();
        assert_eq!(joined.as_deref(), Some("abc"));
    }

    #[test]
    fn closures_capture_environment() {
        let offset = 10;
        let add = move |x: i32| async move { x + offset };
        assert_eq!(add.invoke((5,)).now_or_never(), Some(15));
    }
}
