//! Spreading an argument tuple into individual call arguments.
//!
//! Publishers deliver their arguments as a single tuple. [`Forward`] and
//! [`ForwardMethod`] let the adapters in [`crate::adapter`] bind targets that
//! take those arguments one by one. Each parameter of the target picks how it
//! receives its element through [`ArgView`]:
//!
//! | Delivered element | Accepted parameter types          |
//! |-------------------|-----------------------------------|
//! | `A`               | `&A`, or `A` when `A: Clone`      |
//! | `String`          | additionally `&str`               |
//! | `Vec<T>`          | additionally `&[T]`               |
//!
//! A publisher of `(i32, String)` therefore accepts `fn(i32, &str)`,
//! `fn(&i32, &String)` or `fn(i32, String)`. Implementations exist for tuples
//! of up to eight elements.
//!
//! The `Marker` parameter of both traits is the target's own parameter list,
//! written as a function pointer type. It is always inferred.

/// How a target parameter is produced from a delivered argument of type `A`.
pub trait ArgView<A: 'static> {
    /// The parameter type handed to the target for a borrow of `'a`.
    type Item<'a>;

    /// Produce the parameter from the delivered argument.
    fn view(arg: &A) -> Self::Item<'_>;
}

impl<A: 'static> ArgView<A> for &A {
    type Item<'a> = &'a A;

    fn view(arg: &A) -> Self::Item<'_> {
        arg
    }
}

impl<A: Clone + 'static> ArgView<A> for A {
    type Item<'a> = A;

    fn view(arg: &A) -> Self::Item<'_> {
        arg.clone()
    }
}

impl ArgView<String> for &str {
    type Item<'a> = &'a str;

    fn view(arg: &String) -> Self::Item<'_> {
        arg.as_str()
    }
}

impl<T: 'static> ArgView<Vec<T>> for &[T] {
    type Item<'a> = &'a [T];

    fn view(arg: &Vec<T>) -> Self::Item<'_> {
        arg.as_slice()
    }
}

/// A free function or closure callable with the elements of `Args`.
pub trait Forward<Args, Marker>: Send + Sync + 'static {
    /// Call `self` with each element of `args`, in order.
    fn forward(&self, args: &Args);
}

/// A method callable on `&T` with the elements of `Args`.
pub trait ForwardMethod<T, Args, Marker>: Send + Sync + 'static {
    /// Call `self` on `instance` with each element of `args`, in order.
    fn forward_to(&self, instance: &T, args: &Args);
}

macro_rules! impl_forward {
    ($($arg:ident $param:ident $val:ident),*) => {
        impl<Func, $($arg, $param,)*> Forward<($($arg,)*), fn($($param),*)> for Func
        where
            Func: Send + Sync + 'static,
            Func: Fn($($param),*)
                + for<'a> Fn($(<$param as ArgView<$arg>>::Item<'a>),*),
            $($arg: 'static, $param: ArgView<$arg>,)*
        {
            fn forward(&self, args: &($($arg,)*)) {
                fn call<$($param),*>(func: impl Fn($($param),*), $($val: $param),*) {
                    func($($val),*);
                }

                let ($($val,)*) = args;
                call(self $(, <$param as ArgView<$arg>>::view($val))*);
            }
        }

        impl<Func, T, $($arg, $param,)*> ForwardMethod<T, ($($arg,)*), fn($($param),*)> for Func
        where
            Func: Send + Sync + 'static,
            Func: Fn(&T $(, $param)*)
                + for<'a, 't> Fn(&'t T $(, <$param as ArgView<$arg>>::Item<'a>)*),
            $($arg: 'static, $param: ArgView<$arg>,)*
        {
            fn forward_to(&self, instance: &T, args: &($($arg,)*)) {
                fn call<T, $($param),*>(
                    func: impl Fn(&T $(, $param)*),
                    instance: &T
                    $(, $val: $param)*
                ) {
                    func(instance $(, $val)*);
                }

                let ($($val,)*) = args;
                call(self, instance $(, <$param as ArgView<$arg>>::view($val))*);
            }
        }
    };
}

impl_forward!();
impl_forward!(A0 P0 a0);
impl_forward!(A0 P0 a0, A1 P1 a1);
impl_forward!(A0 P0 a0, A1 P1 a1, A2 P2 a2);
impl_forward!(A0 P0 a0, A1 P1 a1, A2 P2 a2, A3 P3 a3);
impl_forward!(A0 P0 a0, A1 P1 a1, A2 P2 a2, A3 P3 a3, A4 P4 a4);
impl_forward!(A0 P0 a0, A1 P1 a1, A2 P2 a2, A3 P3 a3, A4 P4 a4, A5 P5 a5);
impl_forward!(A0 P0 a0, A1 P1 a1, A2 P2 a2, A3 P3 a3, A4 P4 a4, A5 P5 a5, A6 P6 a6);
impl_forward!(A0 P0 a0, A1 P1 a1, A2 P2 a2, A3 P3 a3, A4 P4 a4, A5 P5 a5, A6 P6 a6, A7 P7 a7);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn concat(a: u8, b: &char, c: &str) -> String {
        format!("{a}{b}{c}")
    }

    #[test]
    fn test_forward_preserves_argument_order() {
        let out = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&out);
        let f = move |a: u8, b: &char, c: &str| {
            *sink.lock().unwrap() = concat(a, b, c);
        };

        f.forward(&(1_u8, 'x', "tail".to_string()));

        assert_eq!(*out.lock().unwrap(), "1xtail");
    }

    #[test]
    fn test_forward_zero_arity() {
        let hits = Arc::new(Mutex::new(0_u32));
        let sink = Arc::clone(&hits);
        let f = move || *sink.lock().unwrap() += 1;

        f.forward(&());
        f.forward(&());

        assert_eq!(*hits.lock().unwrap(), 2);
    }

    #[test]
    fn test_forward_mixed_parameter_kinds() {
        let out = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&out);
        let f = move |owned: String, text: &str, items: &[u16], total: &u64| {
            let sum: u64 = items.iter().copied().map(u64::from).sum();
            sink.lock().unwrap().push(format!("{owned}/{text}/{sum}/{total}"));
        };

        f.forward(&(
            "a".to_string(),
            "b".to_string(),
            vec![1_u16, 2, 3],
            6_u64,
        ));

        assert_eq!(*out.lock().unwrap(), vec!["a/b/6/6"]);
    }

    #[test]
    fn test_by_value_parameter_receives_a_clone() {
        let args = (vec![1_u8, 2],);
        let out = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&out);
        let f = move |mut items: Vec<u8>| {
            items.push(9);
            *sink.lock().unwrap() = items;
        };

        f.forward(&args);

        assert_eq!(*out.lock().unwrap(), vec![1, 2, 9]);
        assert_eq!(args.0, vec![1, 2]);
    }

    struct Accumulator {
        total: Mutex<i64>,
    }

    impl Accumulator {
        fn add(&self, amount: i64, times: &u32) {
            *self.total.lock().unwrap() += amount * i64::from(*times);
        }
    }

    #[test]
    fn test_forward_method_binds_receiver() {
        let acc = Accumulator {
            total: Mutex::new(0),
        };

        Accumulator::add.forward_to(&acc, &(5_i64, 3_u32));
        Accumulator::add.forward_to(&acc, &(-2_i64, 1_u32));

        assert_eq!(*acc.total.lock().unwrap(), 13);
    }
}
