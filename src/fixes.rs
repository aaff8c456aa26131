//! Built-in SQL fix statements.
//!
//! The RLS policies on `public.profiles` call a `public.is_admin()` helper
//! that was missing from the hosted project. The statement below installs it.
//! The text is sent to the database verbatim; keep it valid plpgsql.

/// Creates `public.is_admin(user_id uuid)`, a SECURITY DEFINER helper that
/// reports whether the given user (defaulting to the caller) has the `admin`
/// role in `public.profiles`.
pub const IS_ADMIN_FUNCTION: &str = r#"
CREATE OR REPLACE FUNCTION public.is_admin(user_id uuid DEFAULT auth.uid())
RETURNS boolean
LANGUAGE plpgsql
SECURITY DEFINER
AS $$
BEGIN
    RETURN EXISTS (
        SELECT 1 FROM public.profiles
        WHERE id = user_id AND role = 'admin'
    );
END;
$$;
"#;
