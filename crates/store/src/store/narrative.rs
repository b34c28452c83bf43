//! Character, chapter, plot-arc, and scene operations
//!
//! All of these resolve through `(book_id, version_id)`; scenes descend
//! one level further into their plot arc, the same path shape as world
//! children.

use tracing::debug;

use fablecraft_domain::{
    BookId, Chapter, ChapterId, Character, CharacterId, DomainError, Name, PlotArc, PlotArcId,
    Scene, SceneId, Title, VersionId,
};

use crate::patch::{
    CreateChapterData, CreateCharacterData, CreatePlotArcData, CreateSceneData, UpdateChapterData,
    UpdateCharacterData, UpdatePlotArcData, UpdateSceneData,
};

use super::BookStore;

impl BookStore {
    pub(crate) fn plot_arc_mut(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        arc_id: &PlotArcId,
    ) -> Option<&mut PlotArc> {
        self.version_mut(book_id, version_id)?
            .plot_arcs
            .iter_mut()
            .find(|a| &a.id == arc_id)
    }

    // ------------------------------------------------------------------
    // Characters
    // ------------------------------------------------------------------

    pub fn characters(&self, book_id: &BookId, version_id: &VersionId) -> Option<&[Character]> {
        Some(self.version(book_id, version_id)?.characters.as_slice())
    }

    pub fn character(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        character_id: &CharacterId,
    ) -> Option<&Character> {
        self.version(book_id, version_id)?
            .characters
            .iter()
            .find(|c| &c.id == character_id)
    }

    pub fn create_character(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        data: CreateCharacterData,
    ) -> Result<Character, DomainError> {
        let name = Name::new(data.name)?;
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let mut character = Character::new(name);
        if let Some(role) = data.role {
            character = character.with_role(role);
        }
        if let Some(age) = data.age {
            character.age = Some(age);
        }
        if let Some(gender) = data.gender {
            character.gender = Some(gender);
        }
        if let Some(occupation) = data.occupation {
            character.occupation = Some(occupation);
        }
        if let Some(backstory) = data.backstory {
            character = character.with_backstory(backstory);
        }
        if let Some(appearance) = data.appearance {
            character.appearance = appearance;
        }
        if let Some(personality) = data.personality {
            character.personality = personality;
        }
        if let Some(arc) = data.arc {
            character.arc = arc;
        }
        if let Some(relationships) = data.relationships {
            character.relationships = relationships;
        }
        if let Some(tags) = data.tags {
            character.tags = tags;
        }
        version.characters.push(character.clone());
        debug!(character_id = %character.id, version_id = %version_id, "created character");
        Ok(character)
    }

    pub fn update_character(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        character_id: &CharacterId,
        data: UpdateCharacterData,
    ) -> Result<Character, DomainError> {
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let character = version
            .characters
            .iter_mut()
            .find(|c| &c.id == character_id)
            .ok_or_else(|| DomainError::not_found("Character", character_id.as_str()))?;
        data.apply(character)?;
        let updated = character.clone();
        debug!(character_id = %character_id, "updated character");
        Ok(updated)
    }

    /// Delete a character.
    ///
    /// References to the character elsewhere (scene casts, object owners,
    /// lore mentions, relationships) are left in place.
    pub fn delete_character(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        character_id: &CharacterId,
    ) -> Result<(), DomainError> {
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let before = version.characters.len();
        version.characters.retain(|c| &c.id != character_id);
        if version.characters.len() == before {
            return Err(DomainError::not_found("Character", character_id.as_str()));
        }
        debug!(character_id = %character_id, "deleted character");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Chapters
    // ------------------------------------------------------------------

    pub fn chapters(&self, book_id: &BookId, version_id: &VersionId) -> Option<&[Chapter]> {
        Some(self.version(book_id, version_id)?.chapters.as_slice())
    }

    pub fn chapter(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        chapter_id: &ChapterId,
    ) -> Option<&Chapter> {
        self.version(book_id, version_id)?
            .chapters
            .iter()
            .find(|c| &c.id == chapter_id)
    }

    pub fn create_chapter(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        data: CreateChapterData,
    ) -> Result<Chapter, DomainError> {
        let title = Title::new(data.title)?;
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let number = data
            .number
            .unwrap_or_else(|| version.chapters.len() as u32 + 1);
        let mut chapter = Chapter::new(number, title);
        if let Some(summary) = data.summary {
            chapter.summary = summary;
        }
        if let Some(content) = data.content {
            chapter.content = content;
            chapter.recount_words();
        }
        if let Some(word_count) = data.word_count {
            chapter.word_count = word_count;
        }
        if let Some(status) = data.status {
            chapter.status = status;
        }
        version.chapters.push(chapter.clone());
        debug!(chapter_id = %chapter.id, version_id = %version_id, "created chapter");
        Ok(chapter)
    }

    pub fn update_chapter(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        chapter_id: &ChapterId,
        data: UpdateChapterData,
    ) -> Result<Chapter, DomainError> {
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let chapter = version
            .chapters
            .iter_mut()
            .find(|c| &c.id == chapter_id)
            .ok_or_else(|| DomainError::not_found("Chapter", chapter_id.as_str()))?;
        data.apply(chapter)?;
        let updated = chapter.clone();
        debug!(chapter_id = %chapter_id, "updated chapter");
        Ok(updated)
    }

    pub fn delete_chapter(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        chapter_id: &ChapterId,
    ) -> Result<(), DomainError> {
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let before = version.chapters.len();
        version.chapters.retain(|c| &c.id != chapter_id);
        if version.chapters.len() == before {
            return Err(DomainError::not_found("Chapter", chapter_id.as_str()));
        }
        debug!(chapter_id = %chapter_id, "deleted chapter");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Plot arcs
    // ------------------------------------------------------------------

    pub fn plot_arcs(&self, book_id: &BookId, version_id: &VersionId) -> Option<&[PlotArc]> {
        Some(self.version(book_id, version_id)?.plot_arcs.as_slice())
    }

    pub fn plot_arc(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        arc_id: &PlotArcId,
    ) -> Option<&PlotArc> {
        self.version(book_id, version_id)?
            .plot_arcs
            .iter()
            .find(|a| &a.id == arc_id)
    }

    pub fn create_plot_arc(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        data: CreatePlotArcData,
    ) -> Result<PlotArc, DomainError> {
        let name = Name::new(data.name)?;
        let scenes = data
            .scenes
            .unwrap_or_default()
            .into_iter()
            .map(CreateSceneData::into_scene)
            .collect::<Result<Vec<Scene>, DomainError>>()?;
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let mut arc = PlotArc::new(name);
        if let Some(description) = data.description {
            arc = arc.with_description(description);
        }
        if let Some(status) = data.status {
            arc.status = status;
        }
        if let Some(timeline) = data.timeline {
            arc.timeline = timeline;
        }
        if let Some(tags) = data.tags {
            arc.tags = tags;
        }
        arc.scenes = scenes;
        version.plot_arcs.push(arc.clone());
        debug!(arc_id = %arc.id, version_id = %version_id, "created plot arc");
        Ok(arc)
    }

    pub fn update_plot_arc(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        arc_id: &PlotArcId,
        data: UpdatePlotArcData,
    ) -> Result<PlotArc, DomainError> {
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let arc = version
            .plot_arcs
            .iter_mut()
            .find(|a| &a.id == arc_id)
            .ok_or_else(|| DomainError::not_found("PlotArc", arc_id.as_str()))?;
        data.apply(arc)?;
        let updated = arc.clone();
        debug!(arc_id = %arc_id, "updated plot arc");
        Ok(updated)
    }

    pub fn delete_plot_arc(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        arc_id: &PlotArcId,
    ) -> Result<(), DomainError> {
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let before = version.plot_arcs.len();
        version.plot_arcs.retain(|a| &a.id != arc_id);
        if version.plot_arcs.len() == before {
            return Err(DomainError::not_found("PlotArc", arc_id.as_str()));
        }
        debug!(arc_id = %arc_id, "deleted plot arc");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Scenes
    // ------------------------------------------------------------------

    pub fn scenes(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        arc_id: &PlotArcId,
    ) -> Option<&[Scene]> {
        Some(self.plot_arc(book_id, version_id, arc_id)?.scenes.as_slice())
    }

    pub fn scene(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        arc_id: &PlotArcId,
        scene_id: &SceneId,
    ) -> Option<&Scene> {
        self.plot_arc(book_id, version_id, arc_id)?
            .scenes
            .iter()
            .find(|s| &s.id == scene_id)
    }

    pub fn create_scene(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        arc_id: &PlotArcId,
        data: CreateSceneData,
    ) -> Result<Scene, DomainError> {
        let scene = data.into_scene()?;
        let arc = self
            .plot_arc_mut(book_id, version_id, arc_id)
            .ok_or_else(|| DomainError::not_found("PlotArc", arc_id.as_str()))?;
        arc.scenes.push(scene.clone());
        debug!(scene_id = %scene.id, arc_id = %arc_id, "created scene");
        Ok(scene)
    }

    pub fn update_scene(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        arc_id: &PlotArcId,
        scene_id: &SceneId,
        data: UpdateSceneData,
    ) -> Result<Scene, DomainError> {
        let arc = self
            .plot_arc_mut(book_id, version_id, arc_id)
            .ok_or_else(|| DomainError::not_found("PlotArc", arc_id.as_str()))?;
        let scene = arc
            .scenes
            .iter_mut()
            .find(|s| &s.id == scene_id)
            .ok_or_else(|| DomainError::not_found("Scene", scene_id.as_str()))?;
        data.apply(scene)?;
        let updated = scene.clone();
        debug!(scene_id = %scene_id, "updated scene");
        Ok(updated)
    }

    pub fn delete_scene(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        arc_id: &PlotArcId,
        scene_id: &SceneId,
    ) -> Result<(), DomainError> {
        let arc = self
            .plot_arc_mut(book_id, version_id, arc_id)
            .ok_or_else(|| DomainError::not_found("PlotArc", arc_id.as_str()))?;
        let before = arc.scenes.len();
        arc.scenes.retain(|s| &s.id != scene_id);
        if arc.scenes.len() == before {
            return Err(DomainError::not_found("Scene", scene_id.as_str()));
        }
        debug!(scene_id = %scene_id, "deleted scene");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fablecraft_domain::{ArcStatus, DomainError, SceneStatus, VersionId};

    use super::super::testing::store_with_version;
    use crate::patch::{
        CreateChapterData, CreateCharacterData, CreatePlotArcData, CreateSceneData,
        UpdateChapterData, UpdateCharacterData, UpdatePlotArcData, UpdateSceneData,
    };

    fn character_data(name: &str) -> CreateCharacterData {
        CreateCharacterData {
            name: name.into(),
            role: None,
            age: None,
            gender: None,
            occupation: None,
            backstory: None,
            appearance: None,
            personality: None,
            arc: None,
            relationships: None,
            tags: None,
        }
    }

    fn arc_data(name: &str) -> CreatePlotArcData {
        CreatePlotArcData {
            name: name.into(),
            description: None,
            status: None,
            timeline: None,
            scenes: None,
            tags: None,
        }
    }

    fn scene_data(title: &str) -> CreateSceneData {
        CreateSceneData {
            title: title.into(),
            chapter_number: None,
            word_count: None,
            status: None,
            characters: None,
            plot_points: None,
        }
    }

    #[test]
    fn created_characters_get_pairwise_distinct_ids() {
        let (mut store, book_id, version_id) = store_with_version();
        let mut ids = Vec::new();
        for name in ["Kaelen", "Mirelle", "Orven", "Sable"] {
            let c = store
                .create_character(&book_id, &version_id, character_data(name))
                .unwrap();
            ids.push(c.id);
        }
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                assert_ne!(ids[i], ids[j]);
            }
        }
    }

    #[test]
    fn character_lifecycle_create_update_delete() {
        let (mut store, book_id, version_id) = store_with_version();

        let created = store
            .create_character(&book_id, &version_id, character_data("Kaelen"))
            .unwrap();
        assert_eq!(store.characters(&book_id, &version_id).unwrap().len(), 1);

        let updated = store
            .update_character(
                &book_id,
                &version_id,
                &created.id,
                UpdateCharacterData {
                    age: Some(32),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Kaelen");
        assert_eq!(updated.age, Some(32));
        assert_eq!(updated.backstory, created.backstory);

        store
            .delete_character(&book_id, &version_id, &created.id)
            .unwrap();
        assert!(store.characters(&book_id, &version_id).unwrap().is_empty());
    }

    #[test]
    fn update_against_missing_version_leaves_store_unchanged() {
        let (mut store, book_id, version_id) = store_with_version();
        let created = store
            .create_character(&book_id, &version_id, character_data("Kaelen"))
            .unwrap();
        let err = store
            .update_character(
                &book_id,
                &VersionId::from("no-such-version"),
                &created.id,
                UpdateCharacterData {
                    name: Some("Renamed".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        let current = store
            .character(&book_id, &version_id, &created.id)
            .unwrap();
        assert_eq!(current.name, "Kaelen");
    }

    #[test]
    fn delete_preserves_order_of_survivors() {
        let (mut store, book_id, version_id) = store_with_version();
        let a = store
            .create_character(&book_id, &version_id, character_data("A"))
            .unwrap();
        let b = store
            .create_character(&book_id, &version_id, character_data("B"))
            .unwrap();
        let c = store
            .create_character(&book_id, &version_id, character_data("C"))
            .unwrap();
        store.delete_character(&book_id, &version_id, &b.id).unwrap();
        let names: Vec<_> = store
            .characters(&book_id, &version_id)
            .unwrap()
            .iter()
            .map(|x| x.name.clone())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(store.characters(&book_id, &version_id).unwrap()[0].id, a.id);
        assert_eq!(store.characters(&book_id, &version_id).unwrap()[1].id, c.id);
    }

    #[test]
    fn chapter_word_count_computed_from_content() {
        let (mut store, book_id, version_id) = store_with_version();
        let chapter = store
            .create_chapter(
                &book_id,
                &version_id,
                CreateChapterData {
                    title: "Landfall".into(),
                    number: None,
                    summary: None,
                    content: Some("The tide carried them in at dusk.".into()),
                    word_count: None,
                    status: None,
                },
            )
            .unwrap();
        assert_eq!(chapter.number, 1);
        assert_eq!(chapter.word_count, 7);

        // Explicit count wins over the recount.
        let updated = store
            .update_chapter(
                &book_id,
                &version_id,
                &chapter.id,
                UpdateChapterData {
                    content: Some("Short now.".into()),
                    word_count: Some(1200),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.word_count, 1200);
    }

    #[test]
    fn chapter_numbers_default_to_next_position() {
        let (mut store, book_id, version_id) = store_with_version();
        for expected in 1..=3u32 {
            let chapter = store
                .create_chapter(
                    &book_id,
                    &version_id,
                    CreateChapterData {
                        title: format!("Chapter {}", expected),
                        number: None,
                        summary: None,
                        content: None,
                        word_count: None,
                        status: None,
                    },
                )
                .unwrap();
            assert_eq!(chapter.number, expected);
        }
    }

    #[test]
    fn plot_arc_with_initial_scenes() {
        let (mut store, book_id, version_id) = store_with_version();
        let arc = store
            .create_plot_arc(
                &book_id,
                &version_id,
                CreatePlotArcData {
                    scenes: Some(vec![scene_data("Arrival"), scene_data("The Bargain")]),
                    ..arc_data("The Usurper's Fall")
                },
            )
            .unwrap();
        assert_eq!(arc.scenes.len(), 2);
        assert_ne!(arc.scenes[0].id, arc.scenes[1].id);
        assert_eq!(
            store.scenes(&book_id, &version_id, &arc.id).unwrap().len(),
            2
        );
    }

    #[test]
    fn scene_lifecycle_within_arc() {
        let (mut store, book_id, version_id) = store_with_version();
        let arc = store
            .create_plot_arc(&book_id, &version_id, arc_data("Main"))
            .unwrap();

        let scene = store
            .create_scene(&book_id, &version_id, &arc.id, scene_data("Arrival"))
            .unwrap();
        assert_eq!(
            store
                .scene(&book_id, &version_id, &arc.id, &scene.id)
                .unwrap(),
            &scene
        );

        let updated = store
            .update_scene(
                &book_id,
                &version_id,
                &arc.id,
                &scene.id,
                UpdateSceneData {
                    status: Some(SceneStatus::Drafted),
                    chapter_number: Some(4),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, scene.id);
        assert_eq!(updated.title, "Arrival");
        assert_eq!(updated.status, SceneStatus::Drafted);

        store
            .delete_scene(&book_id, &version_id, &arc.id, &scene.id)
            .unwrap();
        assert!(store
            .scenes(&book_id, &version_id, &arc.id)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn arc_status_is_an_opaque_label() {
        let (mut store, book_id, version_id) = store_with_version();
        let arc = store
            .create_plot_arc(&book_id, &version_id, arc_data("Main"))
            .unwrap();
        // Complete straight from Planned: no transition rules exist.
        let updated = store
            .update_plot_arc(
                &book_id,
                &version_id,
                &arc.id,
                UpdatePlotArcData {
                    status: Some(ArcStatus::Complete),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, ArcStatus::Complete);
    }
}
