//! 类型系统测试

use crate::frontend::core::type_system::{builtin_by_name, builtin_names, TypeInfo};

fn u32_ty() -> TypeInfo {
    TypeInfo::builtin("u32").unwrap()
}

#[cfg(test)]
mod builtin_tests {
    use super::*;

    #[test]
    fn test_catalogue_order() {
        let names: Vec<&str> = builtin_names().collect();
        assert_eq!(
            names,
            vec!["void", "bool", "char", "u8", "i8", "u16", "i16", "u32", "i32", "u64", "i64"]
        );
    }

    #[test]
    fn test_lookup_returns_shared_instance() {
        let a = builtin_by_name("u32").unwrap();
        let b = builtin_by_name("u32").unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.name(), "u32");
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(builtin_by_name("u128").is_none());
        assert!(builtin_by_name("U32").is_none());
        assert!(TypeInfo::builtin("").is_none());
    }
}

#[cfg(test)]
mod equality_tests {
    use super::*;

    #[test]
    fn test_builtins_equal_iff_same_instance() {
        assert_eq!(u32_ty(), u32_ty());
        assert_ne!(u32_ty(), TypeInfo::builtin("i32").unwrap());
    }

    #[test]
    fn test_independent_pointers_are_equal() {
        let a = TypeInfo::pointer_to(u32_ty());
        let b = TypeInfo::pointer_to(u32_ty());
        assert_eq!(a, b);
        assert_ne!(a, TypeInfo::pointer_to(TypeInfo::builtin("u8").unwrap()));
        assert_ne!(a, TypeInfo::pointer_to(a.clone()));
    }

    #[test]
    fn test_routines_compare_arguments_in_order() {
        let bool_ty = TypeInfo::builtin("bool").unwrap();
        let a = TypeInfo::routine(vec![u32_ty(), bool_ty.clone()], bool_ty.clone());
        let b = TypeInfo::routine(vec![u32_ty(), bool_ty.clone()], bool_ty.clone());
        let swapped = TypeInfo::routine(vec![bool_ty.clone(), u32_ty()], bool_ty.clone());
        let shorter = TypeInfo::routine(vec![u32_ty()], bool_ty.clone());
        assert_eq!(a, b);
        assert_ne!(a, swapped);
        assert_ne!(a, shorter);
    }

    #[test]
    fn test_routines_compare_return_type() {
        let a = TypeInfo::routine(vec![], u32_ty());
        let b = TypeInfo::routine(vec![], TypeInfo::builtin("void").unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_argument_lists_are_equal() {
        assert_eq!(TypeInfo::routine(vec![], u32_ty()), TypeInfo::routine(Vec::new(), u32_ty()));
    }

    #[test]
    fn test_families_never_equal() {
        let rt = TypeInfo::routine(vec![], u32_ty());
        assert_ne!(u32_ty(), TypeInfo::pointer_to(u32_ty()));
        assert_ne!(rt, u32_ty());
        assert_ne!(TypeInfo::pointer_to(u32_ty()), rt);
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_builtin_display() {
        assert_eq!(u32_ty().to_string(), "u32");
    }

    #[test]
    fn test_pointer_display() {
        let ty = TypeInfo::pointer_to(TypeInfo::pointer_to(u32_ty()));
        assert_eq!(ty.to_string(), ">>u32");
        assert_eq!(ty.pointer_depth(), 2);
        assert_eq!(ty.pointee().unwrap().to_string(), ">u32");
    }

    #[test]
    fn test_routine_display() {
        let ty = TypeInfo::routine(
            vec![u32_ty(), TypeInfo::pointer_to(u32_ty())],
            TypeInfo::builtin("bool").unwrap(),
        );
        assert_eq!(ty.to_string(), "rt [ u32, >u32 ]: bool");
    }

    #[test]
    fn test_routine_without_arguments_omits_brackets() {
        let ty = TypeInfo::routine(vec![], TypeInfo::builtin("void").unwrap());
        assert_eq!(ty.to_string(), "rt: void");
    }

    #[test]
    fn test_pointer_to_routine_is_parenthesized() {
        let ty = TypeInfo::pointer_to(TypeInfo::routine(vec![u32_ty()], u32_ty()));
        assert_eq!(ty.to_string(), "(rt [ u32 ]: u32)>");
    }

    #[test]
    fn test_routine_returning_routine() {
        let inner = TypeInfo::routine(vec![], TypeInfo::pointer_to(u32_ty()));
        let ty = TypeInfo::routine(vec![inner.clone(), inner], u32_ty());
        assert_eq!(ty.to_string(), "rt [ rt: >u32, rt: >u32 ]: u32");
    }

    #[test]
    fn test_serializes_as_canonical_string() {
        let ty = TypeInfo::pointer_to(TypeInfo::builtin("i8").unwrap());
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\">i8\"");
    }
}

#[cfg(test)]
mod ownership_tests {
    use super::*;

    #[test]
    fn test_dropping_deep_tree_leaves_builtins_intact() {
        let mut ty = u32_ty();
        for depth in 0..64 {
            ty = if depth % 2 == 0 {
                TypeInfo::pointer_to(ty)
            } else {
                TypeInfo::routine(vec![ty, u32_ty()], TypeInfo::builtin("void").unwrap())
            };
        }
        assert_eq!(ty.pointer_depth(), 0);
        drop(ty);

        let shared = builtin_by_name("u32").unwrap();
        assert_eq!(shared.name(), "u32");
        assert_eq!(u32_ty().as_builtin().map(|b| b.name()), Some("u32"));
    }
}
