//! The engine facade: owns the property registry, the active stylesheets,
//! the per-element cascaded/computed style maps, and the invalidation
//! bookkeeping, and exposes the public API described in the design docs'
//! external-interfaces section.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::managers::{default_shorthand_managers, default_value_managers};
use browser_interfaces::{logical_parent, AttrChangeKind, DomNode, MutationEvent, MutationKind, NodeId, ResourceLoadPolicy};
use css_cascade::{build_style_map, property_value_to_lexical_unit, CascadeSheet, InlineDeclaration};
use css_invalidation::InvalidationTracker;
use css_parser_core::{parse_declarations, CssParser, CssRule, Origin as ParserOrigin};
use css_parser_values::{parse_value, LexicalUnit};
use css_stylist_core::{get_computed_style, ParseContext, PropertyRegistry, ShorthandManager, Slot, StyleMap, StyleMapProvider, Value, ValueManager};
use css_types::{Origin, PropertyIndex, NO_PROPERTY};
use fxhash::FxHashMap;
use log::{debug, trace, warn};
use std::collections::HashSet;
use std::rc::Rc;

/// A registered change-notification callback: `(element, pseudo, touched
/// property indices)`. Stored behind an index rather than a name so
/// `remove_listener` is O(1).
pub type Listener<E> = Box<dyn FnMut(&E, Option<&str>, &[PropertyIndex])>;

/// Opaque handle returned by [`CssEngine::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(usize);

/// The CSS engine facade.
///
/// Single-threaded cooperative by convention (see the concurrency design
/// notes): no method here takes `&self` across a yield point, and nothing
/// in this crate spawns a thread. `CssEngine` is intentionally not `Sync`.
pub struct CssEngine<E: DomNode + Clone> {
    registry: Rc<PropertyRegistry<E>>,
    user_agent_sheet: Option<CascadeSheet>,
    user_sheets: Vec<CascadeSheet>,
    author_sheets: Vec<CascadeSheet>,
    active_media: Vec<String>,
    alternate_title: Option<String>,
    style_attribute: String,
    wants_hints: bool,
    document_uri: String,
    resource_load_policy: Box<dyn ResourceLoadPolicy>,
    maps: FxHashMap<(NodeId, Option<String>), StyleMap>,
    /// Every element the engine has built a style map for at least once, so
    /// invalidation can walk logical ancestry without the DOM exposing
    /// forward child iteration.
    element_registry: FxHashMap<NodeId, E>,
    selector_attributes: HashSet<String>,
    invalidation: InvalidationTracker,
    listeners: Vec<Option<Listener<E>>>,
}

impl<E: DomNode + Clone> CssEngine<E> {
    /// Construct an engine with the crate's reference value/shorthand
    /// managers (see `crate::managers::default_value_managers`).
    pub fn new(config: EngineConfig) -> Self {
        Self::with_managers(default_value_managers(), default_shorthand_managers(), config)
    }

    /// Construct an engine with caller-supplied value/shorthand managers.
    pub fn with_managers(
        value_managers: Vec<Box<dyn ValueManager<E>>>,
        shorthand_managers: Vec<Box<dyn ShorthandManager<E>>>,
        config: EngineConfig,
    ) -> Self {
        CssEngine {
            registry: Rc::new(PropertyRegistry::new(value_managers, shorthand_managers)),
            user_agent_sheet: None,
            user_sheets: Vec::new(),
            author_sheets: Vec::new(),
            active_media: config.media,
            alternate_title: None,
            style_attribute: config.style_attribute,
            wants_hints: config.wants_hints,
            document_uri: config.document_uri,
            resource_load_policy: config.resource_load_policy,
            maps: FxHashMap::default(),
            element_registry: FxHashMap::default(),
            selector_attributes: HashSet::new(),
            invalidation: InvalidationTracker::new(),
            listeners: Vec::new(),
        }
    }

    /// The property registry in effect.
    pub fn registry(&self) -> &PropertyRegistry<E> {
        &self.registry
    }

    // ---- Stylesheet management (§4.3, §4.4, §6) -----------------------

    /// Parse and install the single user-agent stylesheet, replacing any
    /// previous one.
    pub fn set_user_agent_style_sheet(&mut self, css: &str) -> Result<(), EngineError> {
        let stylesheet = self.parse_sheet_text(css, ParserOrigin::UserAgent)?;
        debug!("installed user-agent stylesheet ({} rules)", stylesheet.rules.len());
        self.user_agent_sheet = Some(CascadeSheet::new(stylesheet, Origin::UserAgent));
        self.maps.clear();
        Ok(())
    }

    /// Parse and append a user stylesheet (origin `User`).
    pub fn set_user_style_sheet(&mut self, css: &str) -> Result<(), EngineError> {
        let stylesheet = self.parse_sheet_text(css, ParserOrigin::User)?;
        debug!("installed user stylesheet ({} rules)", stylesheet.rules.len());
        self.user_sheets.push(CascadeSheet::new(stylesheet, Origin::User));
        self.maps.clear();
        Ok(())
    }

    /// Parse and append a document (author) stylesheet.
    ///
    /// `title`/`is_alternate` mirror a linked stylesheet's `title` and
    /// `rel="alternate stylesheet"`; `media` scopes it as for a `<link
    /// media="...">` equivalent.
    pub fn parse_style_sheet(
        &mut self,
        css: &str,
        title: Option<&str>,
        is_alternate: bool,
        media: Vec<String>,
    ) -> Result<(), EngineError> {
        let stylesheet = self.parse_sheet_text(css, ParserOrigin::Author)?;
        debug!("parsed author stylesheet ({} rules)", stylesheet.rules.len());

        self.selector_attributes.extend(collect_selector_attributes(&stylesheet.rules));

        let mut sheet = CascadeSheet::new(stylesheet, Origin::Author).with_media(media);
        if let Some(title) = title {
            sheet = sheet.with_title(title);
        }
        if is_alternate {
            sheet = sheet.alternate();
        }
        self.author_sheets.push(sheet);
        self.maps.clear();
        Ok(())
    }

    /// Parse stylesheet text with the reference grammar parser, warning on
    /// any `@import` the resource-load policy rejects.
    fn parse_sheet_text(&self, css: &str, origin: ParserOrigin) -> Result<css_parser_core::Stylesheet, EngineError> {
        let mut stylesheet = CssParser::new().parse(css).map_err(EngineError::from)?;
        stylesheet.origin = origin;
        self.check_imports(&stylesheet.rules);
        Ok(stylesheet)
    }

    fn check_imports(&self, rules: &[CssRule]) {
        for rule in rules {
            match rule {
                CssRule::Import(import) => {
                    if import.url.is_empty() {
                        warn!("dropping @import with an unresolvable URL");
                        continue;
                    }
                    if let Err(reason) = self
                        .resource_load_policy
                        .check_load_external_resource(&import.url, &self.document_uri)
                    {
                        warn!("@import of '{}' rejected: {}", import.url, reason);
                    }
                }
                CssRule::Media(media) => self.check_imports(&media.rules),
                CssRule::Style(_) => {}
            }
        }
    }

    /// Change the active media list; clears every cached style map since
    /// any media-scoped rule may now apply or stop applying.
    pub fn set_media(&mut self, media: Vec<String>) {
        debug!("active media changed to {:?}", media);
        self.active_media = media;
        self.maps.clear();
    }

    /// Select (or clear, with `None`) the preferred alternate stylesheet
    /// title; clears every cached style map.
    pub fn set_alternate_style_sheet(&mut self, title: Option<String>) {
        debug!("alternate stylesheet selection changed to {:?}", title);
        self.alternate_title = title;
        self.maps.clear();
    }

    // ---- Declaration/value parsing (§6) --------------------------------

    /// Parse a bare `"prop: value; prop2: value2"` declaration block, as
    /// for an inline style attribute's text.
    pub fn parse_style_declaration(&self, text: &str) -> Result<Vec<InlineDeclaration>, EngineError> {
        parse_declarations(text).map_err(EngineError::from)
    }

    /// Parse a single property's value text into a cascaded `Value`,
    /// trying a longhand first, then a shorthand's first emitted longhand.
    /// Unknown property names are logged at `trace!` and rejected as
    /// [`EngineError::UnknownProperty`], per the error-handling design.
    pub fn parse_property_value(&self, name: &str, text: &str) -> Result<Value, EngineError> {
        let idx = self.registry.index_of(name);
        if idx == NO_PROPERTY && self.registry.shorthand(name).is_none() {
            trace!("unknown property '{}' dropped", name);
            return Err(EngineError::UnknownProperty(name.to_string()));
        }

        let lexical_unit = parse_value(text, name).map_err(EngineError::from)?;
        let ctx = ParseContext::new(&self.document_uri);
        let mut result = None;
        self.registry
            .create_value(name, &lexical_unit, false, &ctx, &mut |_idx, value, _important| {
                if result.is_none() {
                    result = Some(value);
                }
            })
            .map_err(|e| EngineError::Syntax(e.to_string()))?;
        result.ok_or_else(|| EngineError::UnknownProperty(name.to_string()))
    }

    // ---- Cascade / computed style (§4.4, §4.7, §6) ---------------------

    /// Borrow (building via cascade if necessary) the cascaded style map
    /// for `element`/`pseudo`.
    pub fn get_cascaded_style_map(&mut self, element: &E, pseudo: Option<&str>) -> &StyleMap {
        self.style_map_mut(element, pseudo)
    }

    /// Resolve `element`'s computed value for property `idx` under
    /// `pseudo`, building its cascaded style map first if necessary.
    pub fn get_computed_style(
        &mut self,
        element: &E,
        pseudo: Option<&str>,
        idx: PropertyIndex,
    ) -> Result<Value, EngineError> {
        if idx < 0 || idx as usize >= self.registry.property_count() {
            return Err(EngineError::UnknownProperty(format!("index {}", idx)));
        }
        self.element_registry.insert(element.node_id(), element.clone());
        let registry = Rc::clone(&self.registry);
        Ok(get_computed_style(self, &registry, element, pseudo, idx))
    }

    /// Install `src_engine`'s cascaded style maps for the `(src, dst)` pairs
    /// onto this engine's maps, marking each destination map
    /// `fixed_cascaded_style` so cascade never rewrites it.
    ///
    /// Traversal is driven by caller-supplied pairs rather than a generic
    /// tree walk, since `ElementLike` exposes ancestors and siblings but not
    /// children — a host importing a subtree already knows its shape.
    pub fn import_cascaded_style_maps(&mut self, src_engine: &mut CssEngine<E>, pairs: &[(E, E)]) {
        for (src, dst) in pairs {
            let mut map = src_engine.style_map_mut(src, None).clone();
            map.fixed_cascaded_style = true;
            self.element_registry.insert(dst.node_id(), dst.clone());
            self.maps.insert((dst.node_id(), None), map);
        }
    }

    fn build_cascaded_style_map(&self, element: &E) -> StyleMap {
        let mut sheets = Vec::with_capacity(self.user_sheets.len() + self.author_sheets.len() + 1);
        if let Some(ua) = &self.user_agent_sheet {
            sheets.push(ua.clone());
        }
        sheets.extend(self.user_sheets.iter().cloned());
        sheets.extend(
            self.author_sheets
                .iter()
                .filter(|s| !s.is_alternate || s.title.as_deref() == self.alternate_title.as_deref())
                .cloned(),
        );

        let inline_declarations = element
            .attribute(&self.style_attribute)
            .and_then(|text| self.parse_style_declaration(text).ok())
            .unwrap_or_default();

        let hints = self.non_css_hints(element);

        build_style_map(&self.registry, &sheets, &inline_declarations, &hints, element, &self.active_media)
    }

    fn non_css_hints(&self, element: &E) -> Vec<(String, LexicalUnit)> {
        if !self.wants_hints {
            return Vec::new();
        }
        element
            .attributes_iter()
            .into_iter()
            .filter(|(name, _)| self.registry.index_of(name) != NO_PROPERTY)
            .filter_map(|(name, value)| parse_value(&value, &name).ok().map(|lu| (name, lu)))
            .collect()
    }

    // ---- Listeners (§4.9) ----------------------------------------------

    /// Register a change-notification listener; returns a handle for
    /// [`CssEngine::remove_listener`].
    pub fn add_listener(&mut self, listener: Listener<E>) -> ListenerId {
        self.listeners.push(Some(listener));
        ListenerId(self.listeners.len() - 1)
    }

    /// Unregister a previously-added listener. A no-op if already removed.
    pub fn remove_listener(&mut self, id: ListenerId) {
        if let Some(slot) = self.listeners.get_mut(id.0) {
            *slot = None;
        }
    }

    fn fire(&mut self, element: &E, pseudo: Option<&str>, properties: &[PropertyIndex]) {
        if properties.is_empty() {
            return;
        }
        // Snapshot-on-fire: listeners may add/remove during dispatch
        // without perturbing the call in progress.
        let mut snapshot: Vec<Listener<E>> = self.listeners.drain(..).flatten().collect();
        for listener in snapshot.iter_mut() {
            listener(element, pseudo, properties);
        }
        self.listeners = snapshot.into_iter().map(Some).collect();
    }

    fn all_properties(&self) -> Vec<PropertyIndex> {
        self.registry.all_properties()
    }

    // ---- Invalidation (§4.8) --------------------------------------------

    /// Clear `node`'s computed map (if stylable) and every logical
    /// descendant's, firing `ALL_PROPERTIES` on each. Used when the active
    /// stylesheets themselves changed.
    pub fn invalidate_tree(&mut self, node: &E) {
        let all = self.all_properties();
        if node.is_stylable() {
            if let Some(map) = self.maps.get_mut(&(node.node_id(), None)) {
                css_invalidation::invalidate_computed(map);
            }
            self.fire(node, None, &all);
        }
        let descendants = self.logical_descendants(node.node_id());
        for descendant in descendants {
            if let Some(map) = self.maps.get_mut(&(descendant.node_id(), None)) {
                css_invalidation::invalidate_computed(map);
            }
            self.fire(&descendant, None, &all);
        }
    }

    /// Clear `node`'s own computed map, fire `ALL_PROPERTIES`, then
    /// selectively propagate to logical descendants (only relative-
    /// dependent slots are cleared there).
    pub fn invalidate_node(&mut self, node: &E) {
        let all = self.all_properties();
        if let Some(map) = self.maps.get_mut(&(node.node_id(), None)) {
            css_invalidation::invalidate_computed(map);
        }
        self.fire(node, None, &all);
        self.propagate(node.node_id(), all);
    }

    /// The selective-propagation primitive: for each direct logical child
    /// of `from`, clear only the slots in `props` that are `parent_relative`
    /// (extended by same-element relative dependents when a font-size/
    /// line-height/color slot is among them), fire the union, and recurse.
    fn propagate(&mut self, from: NodeId, props: Vec<PropertyIndex>) {
        if props.is_empty() {
            return;
        }
        let children = self.direct_logical_children(from);
        for child in children {
            let key = (child.node_id(), None);
            let mut touched: Vec<PropertyIndex> = {
                let Some(map) = self.maps.get(&key) else { continue };
                props.iter().copied().filter(|&idx| map.get(idx).parent_relative).collect()
            };

            if !touched.is_empty() {
                self.extend_with_local_relative_dependents(&key, &mut touched);
            }

            if touched.is_empty() {
                continue;
            }

            if let Some(map) = self.maps.get_mut(&key) {
                for &idx in &touched {
                    map.get_mut(idx).clear_computed();
                }
            }

            self.fire(&child, None, &touched);
            self.propagate(child.node_id(), touched);
        }
    }

    fn direct_logical_children(&self, parent: NodeId) -> Vec<E> {
        self.element_registry
            .values()
            .filter(|candidate| {
                candidate.node_id() != parent && logical_parent(*candidate).map(|p| p.node_id()) == Some(parent)
            })
            .cloned()
            .collect()
    }

    fn logical_descendants(&self, root: NodeId) -> Vec<E> {
        self.element_registry
            .values()
            .filter(|candidate| candidate.node_id() != root && self.is_logical_descendant(candidate, root))
            .cloned()
            .collect()
    }

    fn is_logical_descendant(&self, candidate: &E, root: NodeId) -> bool {
        let mut current = logical_parent(candidate);
        while let Some(ancestor) = current {
            if ancestor.node_id() == root {
                return true;
            }
            current = logical_parent(&ancestor);
        }
        false
    }

    /// Dispatch one DOM mutation event.
    ///
    /// `target` is the element the event names (a bare `MutationEvent`
    /// carries only a `NodeId`; the caller, which owns the live tree,
    /// supplies the matching element handle). `following_siblings` gives
    /// the affected siblings for `NodeInserted`/`NodeRemoved` (the
    /// successors of the mutated position), since `ElementLike` exposes
    /// only backward sibling traversal; `document_root` is consulted only
    /// for the stylesheet-carrier cases.
    pub fn process_mutation(
        &mut self,
        event: &MutationEvent,
        target: &E,
        following_siblings: &[E],
        document_root: Option<&E>,
    ) -> Result<(), EngineError> {
        match event.kind {
            MutationKind::AttributeModified => self.process_attribute_mutation(event, target)?,
            MutationKind::NodeInserted => {
                if target.is_stylesheet_carrier() {
                    self.selector_attributes.clear();
                    if let Some(root) = document_root {
                        self.invalidate_tree(root);
                    }
                } else if target.is_stylable() {
                    for sibling in following_siblings {
                        self.invalidate_node(sibling);
                    }
                }
            }
            MutationKind::NodeRemoved => {
                self.maps.remove(&(target.node_id(), None));
                self.element_registry.remove(&target.node_id());
                self.invalidation.process_mutation(event, &self.selector_attributes);
            }
            MutationKind::SubtreeModified => {
                self.invalidation.process_mutation(event, &self.selector_attributes);
                if self.invalidation.dirty_subtrees().contains(&target.node_id()) {
                    self.invalidation.clear_dirty(target.node_id());
                    if target.is_stylesheet_carrier() {
                        self.selector_attributes.clear();
                        if let Some(root) = document_root {
                            self.invalidate_tree(root);
                        }
                    } else {
                        for sibling in following_siblings {
                            self.invalidate_node(sibling);
                        }
                    }
                }
            }
            MutationKind::CharacterDataModified => {
                if let Some(parent) = logical_parent(target) {
                    if parent.is_stylesheet_carrier() {
                        self.selector_attributes.clear();
                        if let Some(root) = document_root {
                            self.invalidate_tree(root);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn process_attribute_mutation(&mut self, event: &MutationEvent, target: &E) -> Result<(), EngineError> {
        let Some(name) = event.related_attribute.as_deref() else {
            return Err(EngineError::InvalidEventKind("AttributeModified with no attribute name".to_string()));
        };
        let Some(change) = event.attr_change else {
            return Err(EngineError::InvalidEventKind("AttributeModified with no attr_change".to_string()));
        };

        let key = (target.node_id(), None);
        if !self.maps.contains_key(&key) {
            return Ok(());
        }

        if name == self.style_attribute {
            self.inline_style_update(target, event.new_value.as_deref(), change);
            return Ok(());
        }

        if self.wants_hints && self.registry.index_of(name) != NO_PROPERTY {
            let idx = self.registry.index_of(name);
            self.hint_update(target, idx, name, event.new_value.as_deref(), change);
            return Ok(());
        }

        if self.selector_attributes.contains(name) {
            self.invalidate_node(target);
        }

        Ok(())
    }

    /// §4.8a: write new inline declarations using inline-write semantics,
    /// firing the touched indices (extended by relative dependents) plus
    /// any previously inline-authored slot the new declaration text no
    /// longer addresses.
    fn inline_style_update(&mut self, target: &E, new_value: Option<&str>, change: AttrChangeKind) {
        if matches!(change, AttrChangeKind::Removal) {
            self.inline_slots_touched_and_orphaned(target, &[], &HashSet::new());
            return;
        }

        let declarations = new_value.and_then(|v| self.parse_style_declaration(v).ok()).unwrap_or_default();
        let ctx = ParseContext::new(&self.document_uri);
        let registry = Rc::clone(&self.registry);
        let mut touched_now = Vec::new();
        let mut addressed = HashSet::new();

        {
            let Some(map) = self.maps.get_mut(&(target.node_id(), None)) else { return };
            for decl in &declarations {
                let lexical_unit = property_value_to_lexical_unit(&decl.value);
                let _ = registry.create_value(&decl.name, &lexical_unit, decl.important, &ctx, &mut |idx, value, important| {
                    addressed.insert(idx);
                    let slot = map.get_mut(idx);
                    if !may_overwrite_as_author(slot.origin, slot.important, important) {
                        return;
                    }
                    if slot.computed {
                        touched_now.push(idx);
                    }
                    slot.value = Some(value);
                    slot.origin = Some(Origin::InlineAuthor);
                    slot.important = important;
                    slot.computed = false;
                    slot.null_cascaded = false;
                    slot.parent_relative = false;
                });
            }
        }

        self.inline_slots_touched_and_orphaned(target, &touched_now, &addressed);
    }

    /// §4.8a: a slot that is both `computed` and of origin `InlineAuthor`
    /// but not in `addressed` (the set of property indices the new
    /// declaration text names, whether or not its write actually won) is an
    /// inline-style removal and must be cleared and fired alongside
    /// whatever `touched_now` already holds, regardless of whether other
    /// properties in the same rewrite were touched.
    fn inline_slots_touched_and_orphaned(
        &mut self,
        target: &E,
        touched_now: &[PropertyIndex],
        addressed: &HashSet<PropertyIndex>,
    ) {
        let key = (target.node_id(), None);
        let orphaned: Vec<PropertyIndex> = {
            let Some(map) = self.maps.get(&key) else { return };
            (0..map.len() as PropertyIndex)
                .filter(|&idx| {
                    let slot = map.get(idx);
                    slot.computed && slot.origin == Some(Origin::InlineAuthor) && !addressed.contains(&idx)
                })
                .collect()
        };

        if orphaned.is_empty() && touched_now.is_empty() {
            return;
        }

        if !orphaned.is_empty() {
            if let Some(map) = self.maps.get_mut(&key) {
                for &idx in &orphaned {
                    map.get_mut(idx).clear_computed();
                }
            }
        }

        let mut touched = touched_now.to_vec();
        for idx in orphaned {
            if !touched.contains(&idx) {
                touched.push(idx);
            }
        }
        self.extend_with_local_relative_dependents(&key, &mut touched);
        self.fire(target, None, &touched);
        self.propagate(target.node_id(), touched);
    }

    /// Hint update for a non-CSS presentational attribute mapped to
    /// property `idx`.
    fn hint_update(&mut self, target: &E, idx: PropertyIndex, name: &str, new_value: Option<&str>, change: AttrChangeKind) {
        let key = (target.node_id(), None);
        {
            let Some(map) = self.maps.get(&key) else { return };
            let slot = map.get(idx);
            if !may_overwrite_as_author(slot.origin, slot.important, false) {
                return;
            }
        }

        if matches!(change, AttrChangeKind::Removal) {
            if let Some(map) = self.maps.get_mut(&key) {
                css_invalidation::invalidate_computed(map);
            }
            let all = self.all_properties();
            self.fire(target, None, &all);
            self.propagate(target.node_id(), all);
            return;
        }

        let Some(value) = new_value else { return };
        let Ok(lexical_unit) = parse_value(value, name) else { return };
        let ctx = ParseContext::new(&self.document_uri);
        let Ok(parsed) = self.registry.manager(idx).create_value(&lexical_unit, &ctx) else { return };

        let was_computed = {
            let Some(map) = self.maps.get_mut(&key) else { return };
            let slot = map.get_mut(idx);
            let was_computed = slot.computed;
            slot.value = Some(parsed);
            slot.origin = Some(Origin::NonCss);
            slot.important = false;
            slot.computed = false;
            slot.null_cascaded = false;
            slot.parent_relative = false;
            slot.font_size_relative = false;
            slot.line_height_relative = false;
            slot.color_relative = false;
            was_computed
        };

        if !was_computed {
            return;
        }

        let mut touched = vec![idx];
        self.extend_with_local_relative_dependents(&key, &mut touched);
        self.fire(target, None, &touched);
        self.propagate(target.node_id(), touched);
    }

    fn extend_with_local_relative_dependents(&self, key: &(NodeId, Option<String>), touched: &mut Vec<PropertyIndex>) {
        let Some(map) = self.maps.get(key) else { return };
        let font_size_idx = self.registry.font_size_index();
        let line_height_idx = self.registry.line_height_index();
        let color_idx = self.registry.color_index();

        if touched.contains(&font_size_idx) {
            extend_relative(map, touched, |slot| slot.font_size_relative);
        }
        if touched.contains(&line_height_idx) {
            extend_relative(map, touched, |slot| slot.line_height_relative);
        }
        if touched.contains(&color_idx) {
            extend_relative(map, touched, |slot| slot.color_relative);
        }
    }

    // ---- Bookkeeping ----------------------------------------------------

    /// Number of cached (element, pseudo) style maps.
    pub fn cache_size(&self) -> usize {
        self.maps.len()
    }

    /// Number of registered author stylesheets.
    pub fn stylesheet_count(&self) -> usize {
        self.author_sheets.len()
    }

    /// Detach all bookkeeping and clear every computed map. After
    /// `dispose`, the engine still parses and answers queries (it rebuilds
    /// lazily) but has forgotten every previously-queried element.
    pub fn dispose(&mut self) {
        self.maps.clear();
        self.element_registry.clear();
        self.listeners.clear();
        self.invalidation = InvalidationTracker::new();
    }
}

impl<E: DomNode + Clone> StyleMapProvider<E> for CssEngine<E> {
    fn style_map_mut(&mut self, element: &E, pseudo: Option<&str>) -> &mut StyleMap {
        self.element_registry.insert(element.node_id(), element.clone());
        let key = (element.node_id(), pseudo.map(|p| p.to_string()));
        if !self.maps.contains_key(&key) {
            let map = self.build_cascaded_style_map(element);
            self.maps.insert(key.clone(), map);
        }
        self.maps.get_mut(&key).unwrap()
    }
}

/// Mirrors `StyleMap::write_author`'s overwrite rule so inline-write and
/// hint-update can decide, without a full cascade re-run, whether a new
/// declaration is allowed to replace what is already in a slot.
fn may_overwrite_as_author(origin: Option<Origin>, slot_important: bool, new_important: bool) -> bool {
    match origin {
        None => true,
        Some(Origin::UserAgent) => true,
        Some(Origin::User) => !slot_important,
        Some(Origin::Author) => !slot_important || new_important,
        Some(Origin::NonCss) | Some(Origin::InlineAuthor) => !slot_important || new_important,
    }
}

fn extend_relative(map: &StyleMap, touched: &mut Vec<PropertyIndex>, predicate: impl Fn(&Slot) -> bool) {
    for idx in 0..map.len() as PropertyIndex {
        if predicate(map.get(idx)) && !touched.contains(&idx) {
            touched.push(idx);
        }
    }
}

fn collect_selector_attributes(rules: &[CssRule]) -> HashSet<String> {
    use css_parser_core::Selector;

    let mut out = HashSet::new();
    for rule in rules {
        match rule {
            CssRule::Style(style_rule) => {
                for selector in &style_rule.selectors {
                    match selector {
                        Selector::Id(_) => {
                            out.insert("id".to_string());
                        }
                        Selector::Class(_) => {
                            out.insert("class".to_string());
                        }
                        Selector::Compound { id, classes, .. } => {
                            if id.is_some() {
                                out.insert("id".to_string());
                            }
                            if !classes.is_empty() {
                                out.insert("class".to_string());
                            }
                        }
                        Selector::Element(_) | Selector::Universal => {}
                    }
                }
            }
            CssRule::Media(media) => out.extend(collect_selector_attributes(&media.rules)),
            CssRule::Import(_) => {}
        }
    }
    out
}
