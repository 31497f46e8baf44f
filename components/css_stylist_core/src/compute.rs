//! The computed-value resolver: turns a cascaded `StyleMap` into computed
//! values, one property at a time, per the resolution cases (no cascaded
//! value vs. `inherit` vs. a manager-computed value).

use crate::registry::PropertyRegistry;
use crate::style_map::StyleMap;
use crate::value::Value;
use browser_interfaces::DomNode;
use css_types::PropertyIndex;

/// Supplies the `StyleMap` for an `(element, pseudo)` pair, building one via
/// the cascade if none exists yet. Implemented by the engine crate, which
/// alone depends on both the cascade assembler and this crate — keeping
/// this crate itself free of a dependency on the cascade.
pub trait StyleMapProvider<E: DomNode> {
    /// Borrow (building if necessary) the style map for `element`/`pseudo`.
    fn style_map_mut(&mut self, element: &E, pseudo: Option<&str>) -> &mut StyleMap;
}

/// Resolution context threaded through a single `get_computed_style` call
/// and into the value managers it invokes, so a manager can look up other
/// already-computed properties on the same element (e.g. `font-size` when
/// resolving an `em` length) without re-deriving the provider/registry
/// plumbing itself.
pub struct ComputeContext<'a, E: DomNode> {
    provider: &'a mut dyn StyleMapProvider<E>,
    registry: &'a PropertyRegistry<E>,
    element: &'a E,
    pseudo: Option<&'a str>,
    /// The property index currently being resolved; used to mark relative
    /// dependence flags when its manager calls back into `computed`.
    current_index: PropertyIndex,
}

impl<'a, E: DomNode + Clone> ComputeContext<'a, E> {
    /// The element whose styles are being computed.
    pub fn element(&self) -> &E {
        self.element
    }

    /// The pseudo-element/class context, if any.
    pub fn pseudo(&self) -> Option<&str> {
        self.pseudo
    }

    /// The property registry in effect.
    pub fn registry(&self) -> &PropertyRegistry<E> {
        self.registry
    }

    /// Resolve another property (by index) on the *same* element, marking
    /// the relative-dependence flag on the slot currently being computed if
    /// `idx` is `font-size`, `line-height`, or `color` and no pseudo context
    /// is in effect (pseudo-element computed styles do not feed back into
    /// the dependency graph the same way).
    pub fn computed(&mut self, idx: PropertyIndex) -> Value {
        let element = self.element.clone();
        let pseudo = self.pseudo.map(|p| p.to_string());
        let result = get_computed_style(self.provider, self.registry, &element, pseudo.as_deref(), idx);

        if self.pseudo.is_none() {
            let current = self.current_index;
            let registry = self.registry;
            let map = self.provider.style_map_mut(self.element, None);
            let slot = map.get_mut(current);
            if idx == registry.font_size_index() {
                slot.font_size_relative = true;
            } else if idx == registry.line_height_index() {
                slot.line_height_relative = true;
            } else if idx == registry.color_index() {
                slot.color_relative = true;
            }
        }

        result
    }

    /// Resolve `idx`'s computed value on this element's logical parent, if
    /// any. Used by managers (e.g. `font-size`) whose relative units resolve
    /// against the *parent's* computed value rather than their own, per the
    /// CSS §4.7 computed-value rules for relative lengths.
    ///
    /// Unlike [`ComputeContext::computed`], this never marks a relative-
    /// dependence flag on the current slot — the parent-font-size dependency
    /// is carried by `parent_relative`/recomputation-on-parent-change at the
    /// invalidation layer instead, since it spans two elements' style maps.
    pub fn parent_computed(&mut self, idx: PropertyIndex) -> Option<Value> {
        let parent = browser_interfaces::logical_parent(self.element)?;
        Some(get_computed_style(self.provider, self.registry, &parent, None, idx))
    }
}

/// Resolve `idx`'s computed value for `element`/`pseudo`, writing the result
/// (and dependency flags) back into its style-map slot, and returning it.
///
/// Implements the four resolution cases:
/// - **A**: no cascaded value, property is not inherited, or there is no
///   parent element — the property's default value.
/// - **B**: the cascaded value is the literal `inherit` keyword — the
///   parent's computed value for the same property.
/// - **C**: no cascaded value, the property is inherited, and a parent
///   exists — the parent's computed value (same outcome as B, different
///   trigger).
/// - **D**: otherwise — the value manager's `compute_value`.
///
/// A slot already marked `computed` is returned without recomputation.
pub fn get_computed_style<E: DomNode + Clone>(
    provider: &mut dyn StyleMapProvider<E>,
    registry: &PropertyRegistry<E>,
    element: &E,
    pseudo: Option<&str>,
    idx: PropertyIndex,
) -> Value {
    {
        let map = provider.style_map_mut(element, pseudo);
        let slot = map.get(idx);
        if slot.computed {
            return slot.value.clone().unwrap_or_else(|| registry.manager(idx).default_value());
        }
    }

    let manager = registry.manager(idx);
    let inherited = manager.is_inherited();
    let parent = browser_interfaces::logical_parent(element);

    let cascaded_opt = {
        let map = provider.style_map_mut(element, pseudo);
        map.get(idx).value.clone()
    };

    let is_inherit_keyword = matches!(cascaded_opt, Some(Value::Inherit));

    // Case A: no cascaded value, not inherited, or no parent to inherit from.
    if cascaded_opt.is_none() && (!inherited || parent.is_none()) {
        let default = manager.default_value();
        write_result(provider, element, pseudo, idx, None, default.clone(), true, false);
        return default;
    }

    // Cases B and C: explicit `inherit`, or no cascaded value but inherited
    // with a parent present.
    if is_inherit_keyword || (cascaded_opt.is_none() && inherited) {
        let parent = parent.expect("checked above");
        let parent_value = get_computed_style(provider, registry, &parent, None, idx);
        write_result(
            provider,
            element,
            pseudo,
            idx,
            cascaded_opt.clone(),
            parent_value.clone(),
            cascaded_opt.is_none(),
            true,
        );
        return parent_value;
    }

    // Case D: a genuine cascaded value — ask the manager to compute it.
    let cascaded = cascaded_opt.expect("checked above");
    let mut ctx = ComputeContext {
        provider,
        registry,
        element,
        pseudo,
        current_index: idx,
    };
    let computed = manager.compute_value(&mut ctx, &cascaded);
    write_result(provider, element, pseudo, idx, Some(cascaded), computed.clone(), false, false);
    computed
}

fn write_result<E: DomNode>(
    provider: &mut dyn StyleMapProvider<E>,
    element: &E,
    pseudo: Option<&str>,
    idx: PropertyIndex,
    cascaded: Option<Value>,
    computed: Value,
    null_cascaded: bool,
    parent_relative: bool,
) {
    let map = provider.style_map_mut(element, pseudo);
    let slot = map.get_mut(idx);

    slot.value = Some(match cascaded {
        Some(cascaded) if cascaded.resolved() != &computed => cascaded.into_computed(computed),
        _ => computed,
    });
    slot.computed = true;
    slot.null_cascaded = null_cascaded;
    slot.parent_relative = parent_relative;
}
