/// Builds the descriptors of the listed entity types, as a tuple.
#[macro_export]
macro_rules! models {
    (
        $( $model:ty ),+ $(,)?
    ) => {
        ( $( <$model as ::relmap::Entity>::model(), )+ )
    };
}

#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                let msg = format!("expected `Err`; actual={:?}", actual);
                $(
                    let msg = format!("{}, {}", msg, format!($($t)*));
                )?
                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual=Err({:?})", e),
        }
    };
}
